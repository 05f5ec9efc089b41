//! Column-role configuration for a reconciliation run.

use serde::{Deserialize, Serialize};

use crate::error::ReconcileError;

/// Assigns semantic roles to column indices of the source dataset.
///
/// Exactly one identifier column and at least one option column are required.
/// Option order is meaningful: it fixes dimension order, combination order,
/// and display order everywhere downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column holding the product identifier rows are grouped by.
    pub identifier: usize,
    /// Option columns, in dimension order.
    pub options: Vec<usize>,
    /// Columns blanked on every synthesized row (serials, barcodes).
    #[serde(default)]
    pub clear_on_synthesis: Vec<usize>,
    /// Category column used by the final-file partitioning pass.
    #[serde(default)]
    pub category: Option<usize>,
    /// Product-name column used by the category consistency check.
    #[serde(default)]
    pub name: Option<usize>,
    /// Price column, overwritten by manual overrides.
    #[serde(default)]
    pub price: Option<usize>,
    /// Quantity column, overwritten by manual overrides.
    #[serde(default)]
    pub quantity: Option<usize>,
}

impl ColumnConfig {
    /// Validate the configuration before any processing starts.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::InvalidConfig` when no option columns are
    /// configured, when the identifier column doubles as an option column,
    /// or when the option list contains duplicates.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        if self.options.is_empty() {
            return Err(ReconcileError::InvalidConfig(
                "at least one option column is required".to_string(),
            ));
        }
        if self.options.contains(&self.identifier) {
            return Err(ReconcileError::InvalidConfig(format!(
                "column {} cannot be both identifier and option",
                self.identifier
            )));
        }
        for (pos, column) in self.options.iter().enumerate() {
            if self.options[..pos].contains(column) {
                return Err(ReconcileError::InvalidConfig(format!(
                    "option column {column} is listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Highest column index referenced by any role.
    pub fn max_column(&self) -> usize {
        let mut max = self.identifier;
        for column in self
            .options
            .iter()
            .chain(self.clear_on_synthesis.iter())
            .chain(self.category.iter())
            .chain(self.name.iter())
            .chain(self.price.iter())
            .chain(self.quantity.iter())
        {
            max = max.max(*column);
        }
        max
    }
}
