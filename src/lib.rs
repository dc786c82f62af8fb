pub mod api;
pub mod error;
pub mod io;
pub mod models;
pub mod normalize;
pub mod pricing;
pub mod valuation;
pub mod variant;

// Re-export commonly used items
pub use api::{MarketClient, OrderEntry, StatisticEntry};
pub use error::{ApiError, ApiResult, InputError, ReportError};
pub use io::{read_line_items, write_report};
pub use models::{LineItem, Valuation, ValuationRow};
pub use normalize::Normalizer;
pub use pricing::{MarketResolver, PriceMethod, PriceResolver, PriceSource};
pub use valuation::appraise;
pub use variant::{StarTable, VariantSelector};
