//! Group statuses and per-row action labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of reconciling one group (or one partition in the final pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    /// Every combination of the observed option space exists.
    Balanced,
    /// At least one combination is missing; rows were synthesized.
    Unbalanced,
    /// Multiple rows but a single distinct value in the last option column.
    StaticOption,
    /// A dimension had no distinct values; nothing to generate.
    Skipped,
    /// The cartesian product would exceed the safety bound.
    TooManyCombinations,
}

impl GroupStatus {
    pub fn is_error(self) -> bool {
        matches!(self, Self::StaticOption | Self::TooManyCombinations)
    }

    /// Whether combination generation ran for this group.
    pub fn generated(self) -> bool {
        matches!(self, Self::Balanced | Self::Unbalanced)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Unbalanced => "Unbalanced",
            Self::StaticOption => "Static Option Error",
            Self::Skipped => "Skipped",
            Self::TooManyCombinations => "Too Many Combinations",
        }
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    /// Original row in a group that needed no synthesis.
    Balanced,
    /// Original row in a group where gaps were filled.
    ExistingWithGaps,
    /// Synthesized row filling a missing combination.
    Added,
    /// Original row passed through because the group was skipped.
    Skipped,
    /// Original row passed through because the last option column was static.
    StaticOption,
    /// Original row passed through because the combination limit was hit.
    TooManyCombos,
}

impl RowAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::ExistingWithGaps => "Existing-with-gaps",
            Self::Added => "Added",
            Self::Skipped => "Skipped",
            Self::StaticOption => "Error: Static Option",
            Self::TooManyCombos => "Error: Too Many Combos",
        }
    }
}

/// Action label attached to every output row, with the optional
/// category-conflict marker from the cross-cutting consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLabel {
    pub action: RowAction,
    pub category_conflict: bool,
}

impl ActionLabel {
    pub fn new(action: RowAction) -> Self {
        Self {
            action,
            category_conflict: false,
        }
    }

    #[must_use]
    pub fn with_conflict(mut self, conflict: bool) -> Self {
        self.category_conflict = conflict;
        self
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action.as_str())?;
        if self.category_conflict {
            f.write_str(" + Category Conflict")?;
        }
        Ok(())
    }
}
