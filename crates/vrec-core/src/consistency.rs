//! Cross-cutting category consistency check.
//!
//! Runs over all rows, not per group, and only decorates action labels; it
//! never affects grouping, combination generation, or synthesis.

use std::collections::{BTreeMap, BTreeSet};

use vrec_model::{ColumnConfig, Row};

use crate::normalize::{comparison_key, is_absent};

/// Normalized product names that appear under more than one category.
///
/// Returns the empty set unless both a name and a category column are
/// configured.
pub fn category_conflicts(rows: &[Row], config: &ColumnConfig) -> BTreeSet<String> {
    let (Some(name_col), Some(category_col)) = (config.name, config.category) else {
        return BTreeSet::new();
    };

    let mut categories_by_name: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for row in rows {
        let name = row.get(name_col).map_or("", String::as_str);
        if is_absent(name) {
            continue;
        }
        let category = row.get(category_col).map_or("", String::as_str);
        categories_by_name
            .entry(comparison_key(name))
            .or_default()
            .insert(comparison_key(category));
    }

    categories_by_name
        .into_iter()
        .filter(|(_, categories)| categories.len() > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Whether a row's name is in the conflict set.
pub fn row_has_conflict(row: &Row, config: &ColumnConfig, conflicts: &BTreeSet<String>) -> bool {
    let Some(name_col) = config.name else {
        return false;
    };
    let name = row.get(name_col).map_or("", String::as_str);
    !is_absent(name) && conflicts.contains(&comparison_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    fn config() -> ColumnConfig {
        ColumnConfig {
            identifier: 0,
            options: vec![1],
            name: Some(2),
            category: Some(3),
            ..ColumnConfig::default()
        }
    }

    #[test]
    fn flags_names_spanning_categories() {
        let rows = vec![
            row(&["P1", "Red", "Widget", "A"]),
            row(&["P2", "Blue", "Widget", "B"]),
            row(&["P3", "Red", "Gadget", "A"]),
        ];
        let conflicts = category_conflicts(&rows, &config());
        assert!(conflicts.contains("widget"));
        assert!(!conflicts.contains("gadget"));
        assert!(row_has_conflict(&rows[0], &config(), &conflicts));
        assert!(!row_has_conflict(&rows[2], &config(), &conflicts));
    }

    #[test]
    fn empty_without_name_or_category_column() {
        let rows = vec![row(&["P1", "Red", "Widget", "A"])];
        let config = ColumnConfig {
            identifier: 0,
            options: vec![1],
            ..ColumnConfig::default()
        };
        assert!(category_conflicts(&rows, &config).is_empty());
    }

    #[test]
    fn category_comparison_is_case_insensitive() {
        let rows = vec![
            row(&["P1", "Red", "Widget", "Tools"]),
            row(&["P2", "Blue", "Widget", " TOOLS "]),
        ];
        assert!(category_conflicts(&rows, &config()).is_empty());
    }
}
