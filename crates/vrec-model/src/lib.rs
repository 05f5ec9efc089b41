//! Shared data model for the variant catalog reconciliation engine.

pub mod config;
pub mod error;
pub mod overrides;
pub mod report;
pub mod status;
pub mod variant;

pub use config::ColumnConfig;
pub use error::{ReconcileError, Result};
pub use overrides::{NoOverrides, Override, OverrideLookup, OverrideStore};
pub use report::{
    CatalogStats, GroupRecord, GroupResult, LabeledRow, MissingValueCount, RunReport,
};
pub use status::{ActionLabel, GroupStatus, RowAction};
pub use variant::{Combination, DimValue, Dimension, Group, KEY_SEPARATOR, Row};
