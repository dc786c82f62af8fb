/// One row of the inventory listing, as produced by the input readers.
///
/// Immutable after parsing; defaulting (quantity 1, rank 0) happens in the
/// reader, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub quantity: u32,
    pub raw_name: String,
    /// Requested mod rank. Ignored for items priced by star configuration.
    pub rank: u32,
}

impl LineItem {
    pub fn new(quantity: u32, raw_name: impl Into<String>, rank: u32) -> Self {
        Self {
            quantity,
            raw_name: raw_name.into(),
            rank,
        }
    }
}

/// One valued row of the report. `resolved_price` and `line_total` stay
/// `None` when every pricing fallback came up empty for the item.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRow {
    pub quantity: u32,
    pub raw_name: String,
    pub rank: u32,
    pub resolved_price: Option<f64>,
    pub line_total: Option<f64>,
}

/// The full appraisal: rows in input order plus the grand total in platinum.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub rows: Vec<ValuationRow>,
    pub grand_total: f64,
}
