//! Run outputs: labeled rows, per-group records, catalog statistics.

use serde::{Deserialize, Serialize};

use crate::status::{ActionLabel, GroupStatus};
use crate::variant::{Combination, Dimension, Row};

/// One output row plus the action label attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledRow {
    pub cells: Row,
    pub label: ActionLabel,
}

/// Per-group summary record, one per group per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRecord {
    pub identifier: String,
    pub status: GroupStatus,
    /// Distinct value counts per dimension, in option order.
    pub dimension_sizes: Vec<usize>,
    /// Distinct display values of the last dimension.
    pub last_dimension_values: Vec<String>,
    /// Free-text explanation shown on the summary sheet.
    pub detail: String,
    pub row_count: usize,
    pub missing_count: usize,
}

/// Everything the engine learned about one group in one pass.
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub status: GroupStatus,
    pub dimensions: Vec<Dimension>,
    pub missing: Vec<Combination>,
}

/// Catalog-wide statistics recomputed after every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_groups: usize,
    pub balanced_groups: usize,
    pub unbalanced_groups: usize,
    pub skipped_groups: usize,
    pub error_groups: usize,
    pub synthesized_rows: usize,
    /// Most frequently missing option values, by raw text, with counts.
    pub top_missing_values: Vec<MissingValueCount>,
}

/// One entry of the top-missing-values ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValueCount {
    pub value: String,
    pub count: usize,
}

/// The complete result of one reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Original + synthesized rows, in group order, with action labels.
    pub corrected: Vec<LabeledRow>,
    /// One record per group.
    pub groups: Vec<GroupRecord>,
    pub stats: CatalogStats,
    /// The category-partitioned, deduplicated, gap-filled dataset.
    pub final_rows: Vec<Row>,
}

impl RunReport {
    pub fn has_errors(&self) -> bool {
        self.stats.error_groups > 0
    }
}
