//! Rows, groups, dimensions, and combinations.

use serde::{Deserialize, Serialize};

/// One record of the source dataset: raw cell text, ordered as in the header.
pub type Row = Vec<String>;

/// Separator used when joining comparison keys into a combination key.
///
/// Cell values are trimmed before key derivation, so the ASCII unit separator
/// can never occur inside a key component.
pub const KEY_SEPARATOR: char = '\u{1f}';

/// All rows sharing one normalized identifier, in source order.
#[derive(Debug, Clone)]
pub struct Group {
    /// Canonical display form of the identifier (first-seen spelling).
    pub identifier: String,
    /// Case/whitespace-insensitive grouping key.
    pub key: String,
    pub rows: Vec<Row>,
}

impl Group {
    /// The row cloned when synthesizing missing variants.
    pub fn template_row(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// One observed option value: display form plus comparison key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimValue {
    /// First-seen trimmed spelling, used for display and synthesis.
    pub display: String,
    /// Lowercased comparison key, used for equality.
    pub key: String,
}

/// The distinct values observed in one option column within one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    /// Source column index of this dimension.
    pub column: usize,
    /// Distinct values, sorted by comparison key.
    pub values: Vec<DimValue>,
}

impl Dimension {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One tuple of option values, one per dimension, in dimension order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Display values, in dimension order.
    pub values: Vec<String>,
    /// Joined comparison keys; two combinations are equal iff keys are equal.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_row_is_first() {
        let group = Group {
            identifier: "P1".to_string(),
            key: "p1".to_string(),
            rows: vec![
                vec!["P1".to_string(), "Red".to_string()],
                vec!["P1".to_string(), "Blue".to_string()],
            ],
        };
        assert_eq!(group.template_row().unwrap()[1], "Red");
    }

    #[test]
    fn separator_survives_trimmed_cells() {
        // A trimmed cell can contain any printable text but never the
        // control character used as the key separator.
        assert!(KEY_SEPARATOR.is_control());
    }
}
