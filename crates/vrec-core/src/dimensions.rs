//! Dimension extraction: the distinct option values observed per group.

use std::collections::BTreeSet;

use vrec_model::{DimValue, Dimension, Group};

use crate::normalize::{clean, comparison_key, is_absent};

/// Result of extracting dimensions for one group.
///
/// All variants carry the extracted dimensions so reporting can show value
/// counts even when combination generation is skipped.
#[derive(Debug, Clone)]
pub enum DimensionOutcome {
    /// Every dimension has values; combination generation may proceed.
    Ready(Vec<Dimension>),
    /// Multiple rows but a single distinct value in the last option column.
    StaticOption(Vec<Dimension>),
    /// At least one dimension has no values at all.
    NoOptions(Vec<Dimension>),
}

/// Extract one dimension per configured option column, in configured order.
///
/// Values are deduplicated by comparison key with the first-seen display form
/// winning, then sorted by key for deterministic generation order. Empty
/// cells contribute nothing.
///
/// The static-option check inspects only the last configured column: more
/// than one row with exactly one distinct value there flags the group. The
/// check deliberately does not apply to earlier dimensions.
pub fn extract(group: &Group, options: &[usize]) -> DimensionOutcome {
    let mut dims = Vec::with_capacity(options.len());
    for &column in options {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut values: Vec<DimValue> = Vec::new();
        for row in &group.rows {
            let raw = row.get(column).map_or("", String::as_str);
            if is_absent(raw) {
                continue;
            }
            let key = comparison_key(raw);
            if seen.insert(key.clone()) {
                values.push(DimValue {
                    display: clean(raw),
                    key,
                });
            }
        }
        values.sort_by(|a, b| a.key.cmp(&b.key));
        dims.push(Dimension { column, values });
    }

    if group.rows.len() > 1
        && dims
            .last()
            .is_some_and(|dim| dim.len() == 1)
    {
        return DimensionOutcome::StaticOption(dims);
    }
    if dims.iter().any(Dimension::is_empty) {
        return DimensionOutcome::NoOptions(dims);
    }
    DimensionOutcome::Ready(dims)
}
