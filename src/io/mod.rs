//! Inventory listing readers and report writer

pub mod reader;
pub mod writer;

// Re-exports for public API convenience
pub use reader::read_line_items;
pub use writer::write_report;
