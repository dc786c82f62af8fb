use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ReportError;
use crate::models::Valuation;

const SHEET_NAME: &str = "Warframe Market Prices";
const HEADERS: [&str; 4] = ["Number", "Item", "Value Per", "Value Total"];

/// Write the valued report as an XLSX workbook.
///
/// One row per valuation row in input order; unresolved prices leave their
/// cells blank. The final row carries the grand total.
pub fn write_report(path: &Path, valuation: &Valuation) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &bold)?;
    }

    for (index, row) in valuation.rows.iter().enumerate() {
        let r = index as u32 + 1;
        sheet.write(r, 0, row.quantity)?;
        sheet.write(r, 1, row.raw_name.as_str())?;
        if let Some(price) = row.resolved_price {
            sheet.write(r, 2, price)?;
        }
        if let Some(total) = row.line_total {
            sheet.write(r, 3, total)?;
        }
    }

    let total_row = valuation.rows.len() as u32 + 1;
    sheet.write_with_format(total_row, 1, "Total", &bold)?;
    sheet.write_with_format(total_row, 3, valuation.grand_total, &bold)?;

    workbook.save(path)?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
