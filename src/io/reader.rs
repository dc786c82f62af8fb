use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::InputError;
use crate::models::LineItem;

lazy_static! {
    // Leading category labels like "stances:" or "warframe mods:"
    static ref CATEGORY_LABEL: Regex = Regex::new(r"^[\w\s]+:\s*").unwrap();
    // "3 copies of X" / "2 of X" / "4 X"
    static ref QUANTITY_PREFIX: Regex =
        Regex::new(r"(?i)^(\d+)\s+(?:copies of|copy of|of)?\s*(.+)$").unwrap();
}

/// Read the inventory listing at `path`, dispatching on file extension.
///
/// Unsupported extensions are structural failures; everything downstream of
/// them defaults instead of failing (quantity 1, rank 0, malformed entries
/// skipped).
pub fn read_line_items(path: &Path) -> Result<Vec<LineItem>, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" | "text" | "list" => read_plain(path),
        "csv" => read_table(path, b','),
        "tsv" => read_table(path, b'\t'),
        "xlsx" | "xlsm" => read_sheet(path),
        _ => Err(InputError::UnsupportedFormat(path.display().to_string())),
    }
}

// ── plain-line listings ──────────────────────────────────────────────

fn read_plain(path: &Path) -> Result<Vec<LineItem>, InputError> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut items = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        // Bare category headers carry no items
        if line.is_empty() || line.ends_with(':') {
            continue;
        }

        let line = CATEGORY_LABEL.replace(line, "");
        for entry in line.split(',') {
            if let Some(item) = parse_entry(entry) {
                items.push(item);
            }
        }
    }

    log::info!("Read {} line items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse one comma-separated entry into a line item.
///
/// Quantity defaults to 1 when no numeric prefix parses; a trailing integer
/// on a multi-word name is the requested mod rank ("primed flow 5").
fn parse_entry(entry: &str) -> Option<LineItem> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let (quantity, rest) = match QUANTITY_PREFIX.captures(entry) {
        Some(caps) => {
            let quantity = caps[1].parse().unwrap_or(1);
            (quantity, caps.get(2).map_or("", |m| m.as_str()).to_string())
        }
        None => (1, entry.to_string()),
    };

    let (name, rank) = split_rank(&rest);
    // A bare number is never an item name
    if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(LineItem::new(quantity, name, rank))
}

/// Split a trailing rank token off a name. A bare number is never a name,
/// so the split only happens when something precedes the token.
fn split_rank(name: &str) -> (String, u32) {
    if let Some((head, tail)) = name.trim().rsplit_once(char::is_whitespace) {
        if let Ok(rank) = tail.parse::<u32>() {
            let head = head.trim_end();
            if !head.is_empty() {
                return (head.to_string(), rank);
            }
        }
    }
    (name.trim().to_string(), 0)
}

// ── delimited tables ─────────────────────────────────────────────────

/// Column positions for quantity / name / rank in a tabular listing.
#[derive(Debug, Clone, Copy)]
struct Layout {
    quantity: Option<usize>,
    name: usize,
    rank: Option<usize>,
}

const DEFAULT_LAYOUT: Layout = Layout {
    quantity: Some(0),
    name: 1,
    rank: Some(2),
};

const QUANTITY_HEADERS: &[&str] = &["quantity", "qty", "number", "count"];
const NAME_HEADERS: &[&str] = &["name", "item", "mod"];
const RANK_HEADERS: &[&str] = &["rank", "mod rank", "mod_rank"];

/// Map the columns of a header row with recognized column names. `None`
/// means no known name column was found.
fn detect_layout(cells: &[String]) -> Option<Layout> {
    let position = |names: &[&str]| {
        cells
            .iter()
            .position(|cell| names.contains(&cell.trim().to_lowercase().as_str()))
    };

    position(NAME_HEADERS).map(|name| Layout {
        quantity: position(QUANTITY_HEADERS),
        name,
        rank: position(RANK_HEADERS),
    })
}

fn row_item(cells: &[String], layout: Layout) -> Option<LineItem> {
    let name = cells.get(layout.name)?.trim();
    if name.is_empty() {
        return None;
    }

    let numeric = |index: Option<usize>, default: u32| {
        index
            .and_then(|i| cells.get(i))
            .and_then(|cell| cell.trim().parse::<u32>().ok())
            .unwrap_or(default)
    };

    Some(LineItem::new(
        numeric(layout.quantity, 1),
        name,
        numeric(layout.rank, 0),
    ))
}

/// Positional data rows lead with the quantity, so a first row whose first
/// cell is not a number is a header even when its column names are not
/// recognized.
fn first_cell_numeric(cells: &[String]) -> bool {
    cells
        .first()
        .is_some_and(|cell| cell.trim().parse::<f64>().is_ok())
}

fn table_items(rows: impl Iterator<Item = Vec<String>>) -> Vec<LineItem> {
    let mut layout = None;
    let mut items = Vec::new();

    for (index, cells) in rows.enumerate() {
        if index == 0 {
            if let Some(detected) = detect_layout(&cells) {
                layout = Some(detected);
                continue;
            }
            layout = Some(DEFAULT_LAYOUT);
            if !first_cell_numeric(&cells) {
                log::debug!("Skipping unrecognized header row: {cells:?}");
                continue;
            }
        }
        if let Some(item) = row_item(&cells, layout.unwrap_or(DEFAULT_LAYOUT)) {
            items.push(item);
        }
    }

    items
}

fn read_table(path: &Path, delimiter: u8) -> Result<Vec<LineItem>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .has_headers(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let items = table_items(rows.into_iter());
    log::info!("Read {} line items from {}", items.len(), path.display());
    Ok(items)
}

// ── spreadsheets ─────────────────────────────────────────────────────

fn read_sheet(path: &Path) -> Result<Vec<LineItem>, InputError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(calamine::Error::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::EmptyWorkbook(path.display().to_string()))?
        .map_err(calamine::Error::from)?;

    let rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
    });

    let items = table_items(rows);
    log::info!("Read {} line items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
