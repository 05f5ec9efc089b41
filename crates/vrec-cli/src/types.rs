use std::path::PathBuf;

use vrec_model::RunReport;
use vrec_report::WorkbookPaths;

/// Column selectors as the operator supplied them (header names or indices).
#[derive(Debug, Clone, Default)]
pub struct ColumnSelection {
    pub identifier: String,
    pub options: Vec<String>,
    pub clear: Vec<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

/// Everything one reconcile invocation needs.
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    pub input: PathBuf,
    pub selection: ColumnSelection,
    pub overrides_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub top_n: usize,
    pub dry_run: bool,
    pub show_progress: bool,
}

/// Result handed to the console summary.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    pub output_dir: PathBuf,
    pub paths: Option<WorkbookPaths>,
}
