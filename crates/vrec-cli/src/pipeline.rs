//! Reconciliation pipeline with explicit stages.
//!
//! 1. **Load**: read the catalog CSV into memory
//! 2. **Configure**: resolve column selectors and detect price/quantity
//! 3. **Process**: run the two-pass reconciliation engine
//! 4. **Write**: emit the workbook sheets and JSON report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::Path;

use anyhow::{Context, Result, bail};
use indicatif::ProgressBar;
use tracing::{info, info_span};

use vrec_core::{EngineOptions, reconcile_with};
use vrec_ingest::{
    CsvTable, detect_price_column, detect_quantity_column, read_csv_table, read_overrides,
    resolve_column,
};
use vrec_model::{ColumnConfig, OverrideStore, RunReport};
use vrec_report::write_workbook;

use crate::types::{ColumnSelection, ReconcileRequest, RunOutcome};

/// Stage 1: load the catalog file.
pub fn load_table(path: &Path) -> Result<CsvTable> {
    let _span = info_span!("load", path = %path.display()).entered();
    let table = read_csv_table(path)?;
    info!(rows = table.rows.len(), columns = table.headers.len(), "catalog loaded");
    Ok(table)
}

/// Stage 2: resolve column selectors against the header row.
///
/// Price and quantity fall back to keyword detection over the headers when
/// not named explicitly; all other roles must resolve or the run stops here.
pub fn build_config(headers: &[String], selection: &ColumnSelection) -> Result<ColumnConfig> {
    let _span = info_span!("configure").entered();

    let identifier = require_column(headers, &selection.identifier, "identifier")?;
    let mut options = Vec::with_capacity(selection.options.len());
    for selector in &selection.options {
        options.push(require_column(headers, selector, "option")?);
    }
    let mut clear_on_synthesis = Vec::with_capacity(selection.clear.len());
    for selector in &selection.clear {
        clear_on_synthesis.push(require_column(headers, selector, "clear")?);
    }

    let config = ColumnConfig {
        identifier,
        options,
        clear_on_synthesis,
        category: optional_column(headers, selection.category.as_deref(), "category")?,
        name: optional_column(headers, selection.name.as_deref(), "name")?,
        price: match selection.price.as_deref() {
            Some(selector) => Some(require_column(headers, selector, "price")?),
            None => detect_price_column(headers),
        },
        quantity: match selection.quantity.as_deref() {
            Some(selector) => Some(require_column(headers, selector, "quantity")?),
            None => detect_quantity_column(headers),
        },
    };
    config.validate().context("validate column configuration")?;
    Ok(config)
}

fn require_column(headers: &[String], selector: &str, role: &str) -> Result<usize> {
    match resolve_column(headers, selector) {
        Some(index) => Ok(index),
        None => bail!("{role} column '{selector}' not found in header"),
    }
}

fn optional_column(
    headers: &[String],
    selector: Option<&str>,
    role: &str,
) -> Result<Option<usize>> {
    selector
        .map(|selector| require_column(headers, selector, role))
        .transpose()
}

/// Stage 3: run the engine, keeping a progress bar responsive per group.
pub fn process(
    table: &CsvTable,
    config: &ColumnConfig,
    overrides: &OverrideStore,
    top_n: usize,
    show_progress: bool,
) -> Result<RunReport> {
    let _span = info_span!("process").entered();
    let bar = if show_progress {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    };
    let options = EngineOptions { top_n };
    let report = reconcile_with(&table.rows, config, overrides, &options, |progress| {
        bar.set_length(progress.total as u64);
        bar.set_position(progress.index as u64 + 1);
        bar.set_message(progress.identifier.to_string());
    })?;
    bar.finish_and_clear();
    info!(
        groups = report.groups.len(),
        synthesized = report.stats.synthesized_rows,
        errors = report.stats.error_groups,
        "reconciliation complete"
    );
    Ok(report)
}

/// Run the whole pipeline for one request.
pub fn run(request: &ReconcileRequest) -> Result<RunOutcome> {
    let table = load_table(&request.input)?;
    let config = build_config(&table.headers, &request.selection)?;

    let overrides = match &request.overrides_file {
        Some(path) => read_overrides(path)?,
        None => OverrideStore::new(),
    };

    let report = process(
        &table,
        &config,
        &overrides,
        request.top_n,
        request.show_progress,
    )?;

    let output_dir = match &request.output_dir {
        Some(dir) => dir.clone(),
        None => request
            .input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output"),
    };

    let paths = if request.dry_run {
        info!("dry run, skipping output files");
        None
    } else {
        let _span = info_span!("write", output_dir = %output_dir.display()).entered();
        Some(write_workbook(&output_dir, &table.headers, &report)?)
    };

    Ok(RunOutcome {
        report,
        output_dir,
        paths,
    })
}
