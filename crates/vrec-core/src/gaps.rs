//! Hit-set construction and missing-combination detection.

use std::collections::BTreeSet;

use vrec_model::{Combination, Group, KEY_SEPARATOR, Row};

use crate::normalize::comparison_key;

/// Build the combination key realized by one existing row.
pub fn row_combination_key(row: &Row, options: &[usize]) -> String {
    let mut key = String::new();
    for (pos, &column) in options.iter().enumerate() {
        if pos > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(&comparison_key(row.get(column).map_or("", String::as_str)));
    }
    key
}

/// The set of combination keys already present in a group's rows.
pub fn build_hits(group: &Group, options: &[usize]) -> BTreeSet<String> {
    group
        .rows
        .iter()
        .map(|row| row_combination_key(row, options))
        .collect()
}

/// All generated combinations absent from the hit set, in generation order.
pub fn find_missing(combinations: &[Combination], hits: &BTreeSet<String>) -> Vec<Combination> {
    combinations
        .iter()
        .filter(|combination| !hits.contains(&combination.key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn row_key_normalizes_cells() {
        let key = row_combination_key(&row(&["P1", " Red ", "M"]), &[1, 2]);
        assert_eq!(key, "red\u{1f}m");
    }

    #[test]
    fn missing_preserves_generation_order() {
        let combinations = vec![
            Combination {
                values: vec!["Blue".to_string()],
                key: "blue".to_string(),
            },
            Combination {
                values: vec!["Red".to_string()],
                key: "red".to_string(),
            },
        ];
        let hits: BTreeSet<String> = ["red".to_string()].into_iter().collect();
        let missing = find_missing(&combinations, &hits);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].key, "blue");
    }
}
