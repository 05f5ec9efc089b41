//! Partitioning rows into per-product groups.

use std::collections::BTreeMap;

use vrec_model::{Group, Row};

use crate::normalize::{clean_sku, comparison_key};

/// Group rows by the identifier column, preserving input order.
///
/// Groups appear in first-seen order and keep their rows in source order.
/// Rows whose identifier is empty after normalization are dropped entirely;
/// they belong to no group and never reach any output.
pub fn group_rows(rows: &[Row], identifier: usize) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for row in rows {
        let raw = row.get(identifier).map_or("", String::as_str);
        let key = comparison_key(raw);
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&pos) => groups[pos].rows.push(row.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    identifier: clean_sku(raw),
                    key,
                    rows: vec![row.clone()],
                });
            }
        }
    }
    groups
}
