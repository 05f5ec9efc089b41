//! Summary-sheet record rendering, shared by the CSV sheet and the console
//! table.

use vrec_model::GroupRecord;

/// Column headers of the summary sheet.
pub const SUMMARY_HEADERS: &[&str] = &[
    "Identifier",
    "First Dimension",
    "Second Dimension",
    "Detail",
    "Status",
    "Distinct Values",
];

/// Render one summary row per group record.
///
/// The second-dimension column shows `-` for single-dimension catalogs; the
/// distinct-values column concatenates the last dimension's display values.
pub fn summary_rows(records: &[GroupRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            vec![
                record.identifier.clone(),
                record
                    .dimension_sizes
                    .first()
                    .map_or_else(|| "-".to_string(), ToString::to_string),
                record
                    .dimension_sizes
                    .get(1)
                    .map_or_else(|| "-".to_string(), ToString::to_string),
                record.detail.clone(),
                record.status.to_string(),
                record.last_dimension_values.join(", "),
            ]
        })
        .collect()
}
