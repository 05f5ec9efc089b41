//! Property tests for normalization and combination generation.

use proptest::prelude::*;

use vrec_core::{cartesian, normalize};
use vrec_model::{DimValue, Dimension};

proptest! {
    #[test]
    fn comparison_key_is_idempotent(value in ".*") {
        let once = normalize::comparison_key(&value);
        prop_assert_eq!(normalize::comparison_key(&once), once);
    }

    #[test]
    fn comparison_key_ignores_case_and_padding(value in "[a-zA-Z0-9 ]{0,20}") {
        let padded = format!("  {}  ", value.to_uppercase());
        prop_assert_eq!(
            normalize::comparison_key(&padded),
            normalize::comparison_key(&value)
        );
    }

    #[test]
    fn cartesian_length_is_product_of_sizes(sizes in prop::collection::vec(1usize..6, 1..4)) {
        let dims: Vec<Dimension> = sizes
            .iter()
            .enumerate()
            .map(|(column, &size)| Dimension {
                column,
                values: (0..size)
                    .map(|n| DimValue {
                        display: format!("V{n}"),
                        key: format!("v{n}"),
                    })
                    .collect(),
            })
            .collect();
        let combos = cartesian("g", &dims).unwrap();
        let expected: usize = sizes.iter().product();
        prop_assert_eq!(combos.len(), expected);

        // Keys are pairwise distinct.
        let mut keys: Vec<&str> = combos.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), expected);
    }
}
