use crate::error::{ApiError, ApiResult};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.warframe.market/v1";
const USER_AGENT: &str = "wfm-appraiser/0.1";

/// One live listing from the order book.
#[derive(Debug, Deserialize, Clone)]
pub struct OrderEntry {
    pub order_type: String,
    pub platinum: f64,
    pub quantity: u32,
    #[serde(default)]
    pub mod_rank: Option<u32>,
    #[serde(default)]
    pub amber_stars: Option<u32>,
    #[serde(default)]
    pub cyan_stars: Option<u32>,
    pub user: OrderUser,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OrderUser {
    pub status: String,
}

impl OrderEntry {
    pub fn is_sell(&self) -> bool {
        self.order_type == "sell"
    }

    /// Sellers reported in-game are the ones actually answering whispers;
    /// this mirrors the site's own default filter.
    pub fn seller_online(&self) -> bool {
        self.user.status == "ingame"
    }
}

/// One aggregated trade window from the statistics endpoint. `min_price`
/// and `median` are computed upstream; they are passed through unchanged.
#[derive(Debug, Deserialize, Clone)]
pub struct StatisticEntry {
    pub datetime: String,
    #[serde(default)]
    pub volume: u32,
    pub min_price: f64,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub mod_rank: Option<u32>,
    #[serde(default)]
    pub amber_stars: Option<u32>,
    #[serde(default)]
    pub cyan_stars: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    payload: OrdersPayload,
}

#[derive(Debug, Deserialize)]
struct OrdersPayload {
    orders: Vec<OrderEntry>,
}

#[derive(Debug, Deserialize)]
struct StatisticsResponse {
    payload: StatisticsPayload,
}

#[derive(Debug, Deserialize)]
struct StatisticsPayload {
    statistics_closed: StatisticsClosed,
}

#[derive(Debug, Deserialize)]
struct StatisticsClosed {
    #[serde(rename = "48hours", default)]
    recent: Vec<StatisticEntry>,
}

/// Blocking client for the public warframe.market v1 API.
pub struct MarketClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl MarketClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a different base URL (for testing with mock servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the live order book for a canonical item key.
    pub fn fetch_orders(&self, canonical_key: &str) -> ApiResult<Vec<OrderEntry>> {
        let url = format!("{}/items/{}/orders", self.base_url, canonical_key);
        log::debug!("Fetching order book: {url}");

        let body: OrdersResponse = serde_json::from_str(&self.get(&url, canonical_key)?.text()?)?;
        Ok(body.payload.orders)
    }

    /// Fetch the most recent closed-trade statistics window for a canonical
    /// item key.
    pub fn fetch_statistics(&self, canonical_key: &str) -> ApiResult<Vec<StatisticEntry>> {
        let url = format!("{}/items/{}/statistics", self.base_url, canonical_key);
        log::debug!("Fetching trade statistics: {url}");

        let body: StatisticsResponse =
            serde_json::from_str(&self.get(&url, canonical_key)?.text()?)?;
        Ok(body.payload.statistics_closed.recent)
    }

    fn get(&self, url: &str, canonical_key: &str) -> ApiResult<reqwest::blocking::Response> {
        let response = self
            .http
            .get(url)
            .header("accept", "application/json")
            .header("platform", "pc")
            .header("User-Agent", USER_AGENT)
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::ItemNotFound(canonical_key.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }
        Ok(response)
    }
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "warframe_market_tests.rs"]
mod tests;
