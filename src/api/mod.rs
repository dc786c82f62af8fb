//! Client for the warframe.market API

pub mod warframe_market;

// Re-exports for public API convenience
pub use warframe_market::{MarketClient, OrderEntry, StatisticEntry};
