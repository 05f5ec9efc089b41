//! CSV loading into an in-memory table of trimmed string cells.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use vrec_model::Row;

/// A fully materialized source table: header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into headers plus string rows.
///
/// The first record is the header; cells are trimmed and stripped of any
/// UTF-8 BOM. Ragged records are allowed, short rows stay short.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open csv file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("read headers from {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect::<Vec<String>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        rows.push(record.iter().map(normalize_cell).collect::<Row>());
    }
    debug!(path = %path.display(), rows = rows.len(), columns = headers.len(), "loaded csv table");
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_collapses_internal_whitespace() {
        assert_eq!(normalize_header("  Unit   Price "), "Unit Price");
        assert_eq!(normalize_header("\u{feff}SKU"), "SKU");
    }

    #[test]
    fn cell_trims_and_strips_bom() {
        assert_eq!(normalize_cell(" Red "), "Red");
        assert_eq!(normalize_cell("\u{feff}Blue"), "Blue");
    }
}
