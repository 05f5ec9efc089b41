//! Bounded cartesian-product generation over a group's dimensions.

use vrec_model::{Combination, Dimension, KEY_SEPARATOR, ReconcileError};

/// Hard cap on the number of generated combinations per group.
///
/// Option counts are user-controlled; a handful of 20+ value dimensions
/// multiplies into millions of tuples without this bound.
pub const COMBINATION_LIMIT: usize = 50_000;

/// Generate every combination of the given dimensions, fold-left.
///
/// Output order is dimension-major: the first dimension varies slowest, each
/// dimension's values appear in their sorted order.
///
/// # Errors
///
/// Returns `ReconcileError::CombinationLimitExceeded` as soon as the running
/// result size would pass `COMBINATION_LIMIT`; the error carries the group
/// key and the offending size so the caller can log and recover per group.
pub fn cartesian(group_key: &str, dims: &[Dimension]) -> Result<Vec<Combination>, ReconcileError> {
    let mut partial: Vec<(Vec<String>, String)> = vec![(Vec::new(), String::new())];
    for dim in dims {
        let next_len = partial.len().saturating_mul(dim.len());
        if next_len > COMBINATION_LIMIT {
            return Err(ReconcileError::CombinationLimitExceeded {
                group: group_key.to_string(),
                size: next_len,
                limit: COMBINATION_LIMIT,
            });
        }
        let mut next = Vec::with_capacity(next_len);
        for (values, key) in &partial {
            for value in &dim.values {
                let mut extended_values = values.clone();
                extended_values.push(value.display.clone());
                let mut extended_key = key.clone();
                if !values.is_empty() {
                    extended_key.push(KEY_SEPARATOR);
                }
                extended_key.push_str(&value.key);
                next.push((extended_values, extended_key));
            }
        }
        partial = next;
    }
    Ok(partial
        .into_iter()
        .map(|(values, key)| Combination { values, key })
        .collect())
}
