//! Tests for the inventory listing readers.

use std::io::Write;

use tempfile::Builder;

use super::read_line_items;
use crate::error::InputError;
use crate::models::LineItem;

fn listing_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

// ── plain text ───────────────────────────────────────────────────────

#[test]
fn plain_listing_parses_quantities_and_names() {
    let file = listing_file(
        ".txt",
        "2 Primed Continuity\n3 copies of Vitality\n1 copy of Flow\n2 of Streamline\n",
    );

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(
        items,
        vec![
            LineItem::new(2, "Primed Continuity", 0),
            LineItem::new(3, "Vitality", 0),
            LineItem::new(1, "Flow", 0),
            LineItem::new(2, "Streamline", 0),
        ]
    );
}

#[test]
fn plain_listing_splits_comma_separated_entries() {
    let file = listing_file(".txt", "2 Vitality, 1 Flow, 3 Streamline\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1], LineItem::new(1, "Flow", 0));
}

#[test]
fn plain_listing_skips_blank_and_category_header_lines() {
    let file = listing_file(".txt", "stances:\n\n2 Vitality\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(2, "Vitality", 0)]);
}

#[test]
fn plain_listing_strips_inline_category_labels() {
    let file = listing_file(".txt", "warframe mods: 2 Vitality\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(2, "Vitality", 0)]);
}

#[test]
fn quantity_defaults_to_one_without_numeric_prefix() {
    let file = listing_file(".txt", "Primed Flow\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(1, "Primed Flow", 0)]);
}

#[test]
fn trailing_integer_token_is_the_requested_rank() {
    let file = listing_file(".txt", "1 Primed Flow 5\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(1, "Primed Flow", 5)]);
}

#[test]
fn bare_number_entry_is_not_an_item() {
    let file = listing_file(".txt", "42\n");

    let items = read_line_items(file.path()).unwrap();
    assert!(items.is_empty());
}

// ── delimited tables ─────────────────────────────────────────────────

#[test]
fn csv_with_header_maps_named_columns() {
    let file = listing_file(".csv", "name,rank,quantity\nPrimed Flow,5,1\nVitality,0,3\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(
        items,
        vec![
            LineItem::new(1, "Primed Flow", 5),
            LineItem::new(3, "Vitality", 0),
        ]
    );
}

#[test]
fn headerless_csv_uses_positional_columns() {
    let file = listing_file(".csv", "2,Vitality,0\n1,Primed Flow,5\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(
        items,
        vec![
            LineItem::new(2, "Vitality", 0),
            LineItem::new(1, "Primed Flow", 5),
        ]
    );
}

#[test]
fn csv_defaults_unparseable_quantity_and_rank() {
    let file = listing_file(".csv", "quantity,name,rank\nmany,Vitality,unranked\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(1, "Vitality", 0)]);
}

#[test]
fn csv_skips_rows_without_a_name() {
    let file = listing_file(".csv", "quantity,name,rank\n2,,0\n1,Flow,0\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(1, "Flow", 0)]);
}

#[test]
fn unrecognized_csv_header_is_not_an_item() {
    // No known column names, but a non-numeric first cell marks a header
    let file = listing_file(".csv", "Count,Item Name,Level\n2,Vitality,0\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(2, "Vitality", 0)]);
}

#[test]
fn tsv_is_read_with_tab_delimiter() {
    let file = listing_file(".tsv", "quantity\tname\trank\n2\tVitality\t0\n");

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(2, "Vitality", 0)]);
}

// ── spreadsheets ─────────────────────────────────────────────────────

#[test]
fn xlsx_sheet_round_trips_through_reader() {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write(0, 0, "quantity").unwrap();
    sheet.write(0, 1, "name").unwrap();
    sheet.write(0, 2, "rank").unwrap();
    sheet.write(1, 0, 2).unwrap();
    sheet.write(1, 1, "Vitality").unwrap();
    sheet.write(1, 2, 0).unwrap();
    sheet.write(2, 0, 1).unwrap();
    sheet.write(2, 1, "Primed Flow").unwrap();
    sheet.write(2, 2, 5).unwrap();
    workbook.save(file.path()).unwrap();

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(
        items,
        vec![
            LineItem::new(2, "Vitality", 0),
            LineItem::new(1, "Primed Flow", 5),
        ]
    );
}

#[test]
fn unrecognized_xlsx_header_is_not_an_item() {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write(0, 0, "Count").unwrap();
    sheet.write(0, 1, "Item Name").unwrap();
    sheet.write(0, 2, "Level").unwrap();
    sheet.write(1, 0, 2).unwrap();
    sheet.write(1, 1, "Vitality").unwrap();
    sheet.write(1, 2, 0).unwrap();
    workbook.save(file.path()).unwrap();

    let items = read_line_items(file.path()).unwrap();
    assert_eq!(items, vec![LineItem::new(2, "Vitality", 0)]);
}

// ── dispatch ─────────────────────────────────────────────────────────

#[test]
fn unsupported_extension_is_a_structural_failure() {
    let file = listing_file(".pdf", "2 Vitality\n");

    let result = read_line_items(file.path());
    match result {
        Err(InputError::UnsupportedFormat(_)) => {}
        other => panic!("Expected InputError::UnsupportedFormat, got: {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let result = read_line_items(std::path::Path::new("/nonexistent/listing.txt"));
    match result {
        Err(InputError::Io(_)) => {}
        other => panic!("Expected InputError::Io, got: {other:?}"),
    }
}
