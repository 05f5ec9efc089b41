//! Integration tests for the CLI pipeline.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use vrec_cli::pipeline::{build_config, run};
use vrec_cli::types::{ColumnSelection, ReconcileRequest};

fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("catalog.csv");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn selection() -> ColumnSelection {
    ColumnSelection {
        identifier: "SKU".to_string(),
        options: vec!["Color".to_string(), "Size".to_string()],
        ..ColumnSelection::default()
    }
}

fn request(input: PathBuf, output_dir: PathBuf) -> ReconcileRequest {
    ReconcileRequest {
        input,
        selection: selection(),
        overrides_file: None,
        output_dir: Some(output_dir),
        top_n: 10,
        dry_run: false,
        show_progress: false,
    }
}

#[test]
fn end_to_end_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let input = write_catalog(
        &dir,
        "SKU,Color,Size,Unit Price\nP1,Red,S,10\nP1,Red,M,10\nP1,Blue,S,10\n",
    );
    let output_dir = dir.path().join("out");

    let outcome = run(&request(input, output_dir.clone())).unwrap();

    assert_eq!(outcome.report.stats.unbalanced_groups, 1);
    assert_eq!(outcome.report.stats.synthesized_rows, 1);
    assert!(!outcome.report.has_errors());
    assert!(output_dir.join("balanced.csv").exists());
    assert!(output_dir.join("action_report.csv").exists());
    assert!(output_dir.join("summary.csv").exists());
    assert!(output_dir.join("final_ready.csv").exists());
    assert!(output_dir.join("report.json").exists());

    let balanced = fs::read_to_string(output_dir.join("balanced.csv")).unwrap();
    assert!(balanced.contains("P1,Blue,M"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_catalog(&dir, "SKU,Color,Size\nP1,Red,S\n");
    let output_dir = dir.path().join("out");

    let mut request = request(input, output_dir.clone());
    request.dry_run = true;
    let outcome = run(&request).unwrap();

    assert!(outcome.paths.is_none());
    assert!(!output_dir.exists());
}

#[test]
fn overrides_file_feeds_synthesis() {
    let dir = TempDir::new().unwrap();
    let input = write_catalog(
        &dir,
        "SKU,Color,Size,Unit Price\nP1,Red,S,10\nP1,Red,M,10\nP1,Blue,S,10\n",
    );
    let overrides = dir.path().join("overrides.json");
    fs::write(
        &overrides,
        "{\"p1\\u001fblue\\u001fm\": {\"price\": \"99\", \"quantity\": \"\"}}",
    )
    .unwrap();

    let mut request = request(input, dir.path().join("out"));
    request.overrides_file = Some(overrides);
    let outcome = run(&request).unwrap();

    let added = outcome
        .report
        .corrected
        .iter()
        .find(|labeled| labeled.label.action == vrec_model::RowAction::Added)
        .unwrap();
    // Unit Price was auto-detected by header keyword.
    assert_eq!(added.cells[3], "99");
}

#[test]
fn unknown_column_fails_before_processing() {
    let headers = vec!["SKU".to_string(), "Color".to_string()];
    let selection = ColumnSelection {
        identifier: "SKU".to_string(),
        options: vec!["Flavor".to_string()],
        ..ColumnSelection::default()
    };
    let error = build_config(&headers, &selection).unwrap_err();
    assert!(error.to_string().contains("Flavor"));
}

#[test]
fn detects_price_and_quantity_columns() {
    let headers = vec![
        "SKU".to_string(),
        "Color".to_string(),
        "Unit Price".to_string(),
        "Stock Qty".to_string(),
    ];
    let selection = ColumnSelection {
        identifier: "SKU".to_string(),
        options: vec!["Color".to_string()],
        ..ColumnSelection::default()
    };
    let config = build_config(&headers, &selection).unwrap();
    assert_eq!(config.price, Some(2));
    assert_eq!(config.quantity, Some(3));
}
