//! Variant catalog reconciliation engine.
//!
//! Checks whether every product in a tabular catalog realizes the full
//! cartesian product of its observed option values, synthesizes the missing
//! variant rows, and produces a category-partitioned, deduplicated final
//! dataset. Pure computation; all I/O lives in the ingest and report crates.

pub mod combos;
pub mod consistency;
pub mod dimensions;
pub mod engine;
pub mod gaps;
pub mod group;
pub mod normalize;
pub mod partition;
pub mod stats;
pub mod synthesize;

pub use combos::{COMBINATION_LIMIT, cartesian};
pub use consistency::category_conflicts;
pub use dimensions::{DimensionOutcome, extract};
pub use engine::{
    EngineOptions, GroupOutcome, GroupProgress, complete_group, reconcile, reconcile_with,
};
pub use gaps::{build_hits, find_missing, row_combination_key};
pub use group::group_rows;
pub use partition::{Partition, dedupe_rows, final_pass, partition_group};
pub use stats::MissingValueCounter;
pub use synthesize::synthesize_row;
