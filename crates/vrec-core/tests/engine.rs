//! Integration tests for the diagnostic reconciliation pass.

use std::collections::BTreeSet;

use vrec_core::{COMBINATION_LIMIT, reconcile, row_combination_key};
use vrec_model::{
    ColumnConfig, GroupStatus, NoOverrides, Override, OverrideStore, Row, RowAction,
};

fn row(cells: &[&str]) -> Row {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

fn basic_config() -> ColumnConfig {
    ColumnConfig {
        identifier: 0,
        options: vec![1, 2],
        ..ColumnConfig::default()
    }
}

#[test]
fn detects_single_missing_combination() {
    let rows = vec![
        row(&["P1", "Red", "S"]),
        row(&["P1", "Red", "M"]),
        row(&["P1", "Blue", "S"]),
    ];
    let report = reconcile(&rows, &basic_config(), &NoOverrides).unwrap();

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].status, GroupStatus::Unbalanced);
    assert_eq!(report.groups[0].missing_count, 1);
    assert_eq!(report.corrected.len(), 4);

    let added: Vec<_> = report
        .corrected
        .iter()
        .filter(|labeled| labeled.label.action == RowAction::Added)
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].cells, row(&["P1", "Blue", "M"]));
    assert_eq!(report.stats.unbalanced_groups, 1);
    assert_eq!(report.stats.synthesized_rows, 1);
}

#[test]
fn completeness_invariant_holds_after_synthesis() {
    let rows = vec![
        row(&["P1", "Red", "S"]),
        row(&["P1", "Blue", "M"]),
        row(&["P1", "Green", "L"]),
    ];
    let config = basic_config();
    let report = reconcile(&rows, &config, &NoOverrides).unwrap();

    // 3 colors x 3 sizes, 3 existing rows, 6 synthesized.
    assert_eq!(report.corrected.len(), 9);
    let keys: BTreeSet<String> = report
        .corrected
        .iter()
        .map(|labeled| row_combination_key(&labeled.cells, &config.options))
        .collect();
    // No duplicates, no omissions.
    assert_eq!(keys.len(), 9);
}

#[test]
fn synthesizer_never_duplicates_a_combination() {
    let rows = vec![
        row(&["P1", "Red", "S"]),
        row(&["P1", "RED", " s "]),
        row(&["P1", "Blue", "M"]),
    ];
    let config = basic_config();
    let report = reconcile(&rows, &config, &NoOverrides).unwrap();

    let added_keys: Vec<String> = report
        .corrected
        .iter()
        .filter(|labeled| labeled.label.action == RowAction::Added)
        .map(|labeled| row_combination_key(&labeled.cells, &config.options))
        .collect();
    let unique: BTreeSet<&String> = added_keys.iter().collect();
    assert_eq!(added_keys.len(), unique.len());
    // The case-variant duplicates count as one hit; only red/m and blue/s
    // are missing.
    assert_eq!(added_keys.len(), 2);
}

#[test]
fn override_price_applies_and_empty_field_passes_through() {
    let config = ColumnConfig {
        identifier: 0,
        options: vec![1, 2],
        price: Some(3),
        quantity: Some(4),
        ..ColumnConfig::default()
    };
    let rows = vec![
        row(&["P1", "Red", "S", "10.00", "7"]),
        row(&["P1", "Red", "M", "10.00", "7"]),
        row(&["P1", "Blue", "S", "10.00", "7"]),
    ];

    let mut overrides = OverrideStore::new();
    overrides.set(
        "p1",
        "blue\u{1f}m",
        Override {
            price: "99".to_string(),
            quantity: String::new(),
        },
    );

    let report = reconcile(&rows, &config, &overrides).unwrap();
    let added = report
        .corrected
        .iter()
        .find(|labeled| labeled.label.action == RowAction::Added)
        .expect("synthesized row");
    assert_eq!(added.cells[3], "99");
    // Empty quantity field leaves the cloned template value untouched.
    assert_eq!(added.cells[4], "7");
}

#[test]
fn combination_limit_passes_rows_through() {
    // 40 x 40 x 40 = 64,000 > 50,000.
    let config = ColumnConfig {
        identifier: 0,
        options: vec![1, 2, 3],
        ..ColumnConfig::default()
    };
    let rows: Vec<Row> = (0..40)
        .map(|n| row(&["BIG", &format!("a{n}"), &format!("b{n}"), &format!("c{n}")]))
        .collect();

    let report = reconcile(&rows, &config, &NoOverrides).unwrap();
    assert_eq!(report.groups[0].status, GroupStatus::TooManyCombinations);
    assert_eq!(report.corrected.len(), 40);
    assert!(
        report
            .corrected
            .iter()
            .all(|labeled| labeled.label.action == RowAction::TooManyCombos)
    );
    assert!(report.groups[0].detail.contains(&COMBINATION_LIMIT.to_string()));
    assert!(report.has_errors());
}

#[test]
fn static_last_option_column_flags_group() {
    let rows = vec![row(&["P1", "Red", "S"]), row(&["P1", "Blue", "S"])];
    let report = reconcile(&rows, &basic_config(), &NoOverrides).unwrap();

    assert_eq!(report.groups[0].status, GroupStatus::StaticOption);
    assert_eq!(report.corrected.len(), 2);
    assert!(
        report
            .corrected
            .iter()
            .all(|labeled| labeled.label.action == RowAction::StaticOption)
    );
    // Static groups also pass through the final file untouched.
    assert_eq!(report.final_rows.len(), 2);
    assert_eq!(report.final_rows[0][0], "P1");
}

#[test]
fn empty_option_column_skips_group() {
    let rows = vec![row(&["P1", "", ""]), row(&["P1", " ", " "])];
    let report = reconcile(&rows, &basic_config(), &NoOverrides).unwrap();
    assert_eq!(report.groups[0].status, GroupStatus::Skipped);
    assert_eq!(report.stats.skipped_groups, 1);
}

#[test]
fn rows_without_identifier_are_excluded() {
    let rows = vec![row(&["", "Red", "S"]), row(&["P1", "Red", "S"])];
    let report = reconcile(&rows, &basic_config(), &NoOverrides).unwrap();
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.corrected.len(), 1);
}

#[test]
fn invalid_config_fails_before_processing() {
    let config = ColumnConfig {
        identifier: 0,
        options: vec![],
        ..ColumnConfig::default()
    };
    assert!(reconcile(&[row(&["P1", "Red"])], &config, &NoOverrides).is_err());
}

#[test]
fn category_conflicts_decorate_labels_without_changing_math() {
    let config = ColumnConfig {
        identifier: 0,
        options: vec![1],
        name: Some(2),
        category: Some(3),
        ..ColumnConfig::default()
    };
    let rows = vec![
        row(&["P1", "Red", "Widget", "A"]),
        row(&["P2", "Blue", "Widget", "B"]),
    ];
    let report = reconcile(&rows, &config, &NoOverrides).unwrap();

    assert_eq!(report.groups.len(), 2);
    assert!(report.corrected.iter().all(|labeled| {
        labeled.label.category_conflict
            && labeled.label.to_string().ends_with("+ Category Conflict")
    }));
    // Conflicts are diagnostic only; both single-variant groups stay balanced.
    assert_eq!(report.stats.balanced_groups, 2);
}

#[test]
fn top_missing_values_rank_by_frequency() {
    let rows = vec![
        row(&["P1", "Red", "S"]),
        row(&["P1", "Red", "M"]),
        row(&["P1", "Blue", "S"]),
        row(&["P2", "Green", "S"]),
        row(&["P2", "Green", "M"]),
        row(&["P2", "Gold", "S"]),
    ];
    let report = reconcile(&rows, &basic_config(), &NoOverrides).unwrap();

    // P1 misses Blue/M, P2 misses Gold/M: "M" appears twice.
    assert_eq!(report.stats.top_missing_values[0].value, "M");
    assert_eq!(report.stats.top_missing_values[0].count, 2);
}
