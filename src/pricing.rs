use clap::ValueEnum;

use crate::api::{MarketClient, OrderEntry, StatisticEntry};
use crate::error::ApiError;
use crate::variant::VariantSelector;

/// Which upstream data shape prices are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriceSource {
    /// Live sell listings
    OrderBook,
    /// Aggregated recent-trade statistics
    Statistics,
}

/// How a single representative price is chosen from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriceMethod {
    Minimum,
    Median,
}

/// Resolves a canonical item key to a representative price in platinum.
///
/// `None` means every fallback came up empty; resolution never fails the
/// batch.
pub trait PriceResolver {
    fn resolve(&self, canonical_key: &str, selector: VariantSelector) -> Option<f64>;
}

/// Price resolver backed by the live warframe.market API.
pub struct MarketResolver {
    client: MarketClient,
    source: PriceSource,
    method: PriceMethod,
}

impl MarketResolver {
    pub fn new(client: MarketClient, source: PriceSource, method: PriceMethod) -> Self {
        Self {
            client,
            source,
            method,
        }
    }
}

impl PriceResolver for MarketResolver {
    fn resolve(&self, canonical_key: &str, selector: VariantSelector) -> Option<f64> {
        let fetched = match self.source {
            PriceSource::OrderBook => self
                .client
                .fetch_orders(canonical_key)
                .map(|orders| order_book_price(&orders, selector, self.method)),
            PriceSource::Statistics => self
                .client
                .fetch_statistics(canonical_key)
                .map(|entries| statistics_price(&entries, selector, self.method)),
        };

        match fetched {
            Ok(Some(price)) => Some(price),
            Ok(None) => {
                log::warn!("No applicable price data for '{canonical_key}'");
                None
            }
            Err(ApiError::ItemNotFound(key)) => {
                log::warn!("Item not found in catalog: '{key}'");
                None
            }
            Err(e) => {
                log::warn!("Price lookup failed for '{canonical_key}': {e}");
                None
            }
        }
    }
}

/// Whether an order satisfies the variant selector.
///
/// An order that does not expose the selector's axis at all matches
/// unconditionally: absence of the field means the item has no such
/// dimension, not that it is at some other variant.
fn order_matches(order: &OrderEntry, selector: VariantSelector) -> bool {
    match selector {
        VariantSelector::Any => true,
        VariantSelector::Rank(rank) => order.mod_rank.map_or(true, |r| r == rank),
        VariantSelector::Stars { amber, cyan } => {
            if order.amber_stars.is_none() && order.cyan_stars.is_none() {
                return true;
            }
            order.amber_stars.unwrap_or(0) == amber && order.cyan_stars.unwrap_or(0) == cyan
        }
    }
}

/// Reduce a live order book to one price.
///
/// Minimum: cheapest matching sell listing from an in-game seller, falling
/// back to any seller status. Median: quantity-weighted median over in-game
/// matching sell listings, falling back to the minimum over matching sell
/// listings regardless of status.
pub fn order_book_price(
    orders: &[OrderEntry],
    selector: VariantSelector,
    method: PriceMethod,
) -> Option<f64> {
    let matching_sells = || {
        orders
            .iter()
            .filter(move |o| o.is_sell() && order_matches(o, selector))
    };

    let min_any_status = || {
        matching_sells()
            .map(|o| o.platinum)
            .min_by(|a, b| a.total_cmp(b))
    };

    match method {
        PriceMethod::Minimum => matching_sells()
            .filter(|o| o.seller_online())
            .map(|o| o.platinum)
            .min_by(|a, b| a.total_cmp(b))
            .or_else(min_any_status),
        PriceMethod::Median => {
            // Weight each listing by the quantity it offers, so one seller
            // with a deep stack moves the median accordingly
            let mut amounts: Vec<f64> = Vec::new();
            for order in matching_sells().filter(|o| o.seller_online()) {
                for _ in 0..order.quantity {
                    amounts.push(order.platinum);
                }
            }
            median(&mut amounts).or_else(min_any_status)
        }
    }
}

/// Median of a multiset: mean of the two central values when even-sized,
/// the exact middle value when odd-sized. `None` when empty.
fn median(amounts: &mut [f64]) -> Option<f64> {
    if amounts.is_empty() {
        return None;
    }
    amounts.sort_by(|a, b| a.total_cmp(b));
    let mid = amounts.len() / 2;
    if amounts.len() % 2 == 0 {
        Some((amounts[mid - 1] + amounts[mid]) / 2.0)
    } else {
        Some(amounts[mid])
    }
}

fn star_pair(entry: &StatisticEntry) -> (u32, u32) {
    (
        entry.amber_stars.unwrap_or(0),
        entry.cyan_stars.unwrap_or(0),
    )
}

/// Reduce a recent-trade statistics window to one price.
///
/// The variant axis is detected from the fields the entries actually carry,
/// then the fallback chain (maxed stars → unsocketed; strict rank above 0,
/// soft at rank 0) narrows the entries; the newest surviving entry supplies
/// its upstream-computed `min_price` or `median` unchanged.
pub fn statistics_price(
    entries: &[StatisticEntry],
    selector: VariantSelector,
    method: PriceMethod,
) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let has_stars = entries
        .iter()
        .any(|e| e.amber_stars.is_some() || e.cyan_stars.is_some());
    let has_rank = entries.iter().any(|e| e.mod_rank.is_some());

    let all = || entries.iter().collect::<Vec<_>>();

    let filtered: Vec<&StatisticEntry> = if has_stars {
        match selector {
            VariantSelector::Stars { amber, cyan } => {
                let maxed: Vec<_> = entries
                    .iter()
                    .filter(|e| star_pair(e) == (amber, cyan))
                    .collect();
                if !maxed.is_empty() {
                    maxed
                } else {
                    // No trades at the maxed configuration; the unsocketed
                    // price is the closest data we have
                    let unsocketed: Vec<_> =
                        entries.iter().filter(|e| star_pair(e) == (0, 0)).collect();
                    if unsocketed.is_empty() {
                        return None;
                    }
                    log::debug!("Falling back to unsocketed sculpture price");
                    unsocketed
                }
            }
            // Star fields present but meaningless for this key
            _ => all(),
        }
    } else if has_rank {
        match selector {
            VariantSelector::Rank(rank) if rank > 0 => {
                let matched: Vec<_> =
                    entries.iter().filter(|e| e.mod_rank == Some(rank)).collect();
                if matched.is_empty() {
                    return None;
                }
                matched
            }
            VariantSelector::Rank(_) => {
                // Rank 0 is the common default; a window with no rank-0
                // trades should not blank the row
                let rank_zero: Vec<_> = entries
                    .iter()
                    .filter(|e| e.mod_rank.unwrap_or(0) == 0)
                    .collect();
                if rank_zero.is_empty() {
                    all()
                } else {
                    rank_zero
                }
            }
            _ => all(),
        }
    } else {
        all()
    };

    let newest = filtered
        .into_iter()
        .max_by(|a, b| a.datetime.cmp(&b.datetime))?;

    Some(match method {
        PriceMethod::Minimum => newest.min_price,
        PriceMethod::Median => newest.median,
    })
}

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod tests;
