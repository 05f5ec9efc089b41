//! Building rows for missing combinations.

use vrec_model::{ColumnConfig, Combination, Override, Row};

/// Synthesize one row for a missing combination.
///
/// The template (the group's first row) is cloned, option columns are set to
/// the combination's values, clear-on-synthesis columns are blanked, and the
/// identifier column is set to the group identifier. When an override is
/// present, only its non-empty fields overwrite the cloned price/quantity.
pub fn synthesize_row(
    template: &Row,
    combination: &Combination,
    config: &ColumnConfig,
    identifier: &str,
    manual: Option<&Override>,
) -> Row {
    let mut row = template.clone();
    let width = config.max_column() + 1;
    if row.len() < width {
        row.resize(width, String::new());
    }

    for (&column, value) in config.options.iter().zip(&combination.values) {
        row[column] = value.clone();
    }
    for &column in &config.clear_on_synthesis {
        row[column] = String::new();
    }
    row[config.identifier] = identifier.to_string();

    if let Some(manual) = manual {
        if let Some(column) = config.price
            && !manual.price.trim().is_empty()
        {
            row[column] = manual.price.trim().to_string();
        }
        if let Some(column) = config.quantity
            && !manual.quantity.trim().is_empty()
        {
            row[column] = manual.quantity.trim().to_string();
        }
    }
    row
}
