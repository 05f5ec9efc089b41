//! Catalog-wide missing-value frequency aggregation.

use std::collections::HashMap;

use vrec_model::MissingValueCount;

/// Counts how often each option value appears across missing combinations,
/// catalog-wide. Keys are the raw display text; ties in the ranking break by
/// first-seen order.
#[derive(Debug, Default)]
pub struct MissingValueCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl MissingValueCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
                self.order.push(value.to_string());
            }
        }
    }

    /// The `n` most frequent values, descending by count.
    pub fn top(&self, n: usize) -> Vec<MissingValueCount> {
        let mut ranked: Vec<(usize, &String)> = self
            .order
            .iter()
            .enumerate()
            .map(|(seen, value)| (seen, value))
            .collect();
        ranked.sort_by(|a, b| {
            let count_a = self.counts[a.1];
            let count_b = self.counts[b.1];
            count_b.cmp(&count_a).then(a.0.cmp(&b.0))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(_, value)| MissingValueCount {
                value: value.clone(),
                count: self.counts[value],
            })
            .collect()
    }
}
