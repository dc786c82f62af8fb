use thiserror::Error;

/// Errors from the warframe.market API boundary.
///
/// These never propagate past the price resolver: a failed lookup degrades
/// the affected row to an absent price and the batch continues.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse a JSON response
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog has no item under this key
    #[error("unknown item: {0}")]
    ItemNotFound(String),
    /// Any other non-success HTTP status
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors while reading the inventory listing. These are structural and
/// terminate the run before any pricing work happens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),
    #[error("unsupported input format: {0} (expected .txt, .csv/.tsv or .xlsx)")]
    UnsupportedFormat(String),
    #[error("spreadsheet has no worksheets: {0}")]
    EmptyWorkbook(String),
}

/// Errors while writing the report workbook.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
