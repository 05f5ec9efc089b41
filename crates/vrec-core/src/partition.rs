//! Category partitioning and the deduplicated final-file pass.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use vrec_model::{ColumnConfig, Group, GroupStatus, KEY_SEPARATOR, OverrideLookup, Row};

use crate::engine::complete_group;
use crate::normalize::comparison_key;

/// One category bucket of a group, carrying its disambiguated identifier.
#[derive(Debug, Clone)]
pub struct Partition {
    pub identifier: String,
    pub rows: Vec<Row>,
}

/// Split a group into category partitions.
///
/// Buckets follow category encounter order. The first bucket keeps the
/// group's identifier; later buckets get a positional `-2`, `-3`, … suffix,
/// which is how one source product spanning several categories becomes
/// several output products. Without a category column there is a single
/// bucket. Every partition row's identifier cell is rewritten to the
/// partition identifier.
pub fn partition_group(group: &Group, config: &ColumnConfig) -> Vec<Partition> {
    let mut buckets: Vec<Vec<Row>> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for row in &group.rows {
        let bucket_key = match config.category {
            Some(column) => comparison_key(row.get(column).map_or("", String::as_str)),
            None => String::new(),
        };
        match index.get(&bucket_key) {
            Some(&pos) => buckets[pos].push(row.clone()),
            None => {
                index.insert(bucket_key, buckets.len());
                buckets.push(vec![row.clone()]);
            }
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(pos, mut rows)| {
            let identifier = if pos == 0 {
                group.identifier.clone()
            } else {
                format!("{}-{}", group.identifier, pos + 1)
            };
            for row in &mut rows {
                if row.len() <= config.identifier {
                    row.resize(config.identifier + 1, String::new());
                }
                row[config.identifier] = identifier.clone();
            }
            Partition { identifier, rows }
        })
        .collect()
}

/// Collapse rows that are duplicates on (normalized option tuple, normalized
/// name, raw price text, raw quantity text). The first occurrence wins.
pub fn dedupe_rows(rows: &[Row], config: &ColumnConfig) -> Vec<Row> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let mut composite = String::new();
        for &column in &config.options {
            composite.push_str(&comparison_key(row.get(column).map_or("", String::as_str)));
            composite.push(KEY_SEPARATOR);
        }
        if let Some(column) = config.name {
            composite.push_str(&comparison_key(row.get(column).map_or("", String::as_str)));
        }
        composite.push(KEY_SEPARATOR);
        if let Some(column) = config.price {
            composite.push_str(row.get(column).map_or("", String::as_str).trim());
        }
        composite.push(KEY_SEPARATOR);
        if let Some(column) = config.quantity {
            composite.push_str(row.get(column).map_or("", String::as_str).trim());
        }
        if seen.insert(composite) {
            kept.push(row.clone());
        }
    }
    kept
}

/// Produce the final deduplicated, gap-filled dataset.
///
/// Groups flagged static in the diagnostic pass go through untouched. All
/// others are re-partitioned by category, deduplicated, and independently
/// re-completed; overrides stay addressed by the parent group's key, not the
/// partition's suffixed identifier.
pub fn final_pass(
    groups: &[Group],
    statuses: &[GroupStatus],
    config: &ColumnConfig,
    overrides: &dyn OverrideLookup,
) -> Vec<Row> {
    let mut output: Vec<Row> = Vec::new();
    for (group, status) in groups.iter().zip(statuses) {
        if *status == GroupStatus::StaticOption {
            output.extend(group.rows.iter().cloned());
            continue;
        }
        for partition in partition_group(group, config) {
            let deduped = dedupe_rows(&partition.rows, config);
            debug!(
                partition = %partition.identifier,
                rows = partition.rows.len(),
                deduped = deduped.len(),
                "final-file partition"
            );
            let sub = Group {
                key: comparison_key(&partition.identifier),
                identifier: partition.identifier,
                rows: deduped,
            };
            let outcome = complete_group(&sub, &group.key, config, overrides);
            output.extend(outcome.rows.into_iter().map(|labeled| labeled.cells));
        }
    }
    output
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
            category: Some(2),
            ..ColumnConfig::default()
        }
    }

    fn group(rows: Vec<Row>) -> Group {
        Group {
            identifier: "P1".to_string(),
            key: "p1".to_string(),
            rows,
        }
    }

    #[test]
    fn suffixes_buckets_after_the_first() {
        let group = group(vec![
            row(&["P1", "Red", "Tools"]),
            row(&["P1", "Blue", "Garden"]),
            row(&["P1", "Green", "tools"]),
        ]);
        let partitions = partition_group(&group, &config());
        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].identifier, "P1");
        assert_eq!(partitions[0].rows.len(), 2);
        assert_eq!(partitions[1].identifier, "P1-2");
        assert_eq!(partitions[1].rows[0][0], "P1-2");
    }

    #[test]
    fn single_bucket_without_category_column() {
        let group = group(vec![row(&["P1", "Red", "A"]), row(&["P1", "Blue", "B"])]);
        let config = ColumnConfig {
            identifier: 0,
            options: vec![1],
            ..ColumnConfig::default()
        };
        let partitions = partition_group(&group, &config);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].rows.len(), 2);
    }

    #[test]
    fn dedupe_collapses_exact_duplicates_only() {
        let config = ColumnConfig {
            identifier: 0,
            options: vec![1],
            name: Some(2),
            price: Some(3),
            ..ColumnConfig::default()
        };
        let rows = vec![
            row(&["P1", "Red", "Widget", "10"]),
            row(&["P1", " red ", "WIDGET", "10"]),
            row(&["P1", "Red", "Widget", "12"]),
        ];
        let deduped = dedupe_rows(&rows, &config);
        assert_eq!(deduped.len(), 2);
    }
}
