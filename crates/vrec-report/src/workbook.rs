//! Writing the four output sheets and the JSON run report.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use vrec_model::{Row, RunReport};

use crate::summary::{SUMMARY_HEADERS, summary_rows};

/// Paths of the artifacts one run produces.
#[derive(Debug, Clone)]
pub struct WorkbookPaths {
    pub balanced: PathBuf,
    pub action_report: PathBuf,
    pub summary: PathBuf,
    pub final_ready: PathBuf,
    pub report_json: PathBuf,
}

/// Write all run outputs into `output_dir`, creating it if needed.
///
/// Sheets: `balanced.csv` (reconciled dataset), `action_report.csv` (same
/// rows plus a trailing action column), `summary.csv` (one row per group),
/// `final_ready.csv` (partitioned, deduplicated dataset), and `report.json`
/// with the full machine-readable report.
pub fn write_workbook(
    output_dir: &Path,
    headers: &[String],
    report: &RunReport,
) -> Result<WorkbookPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let paths = WorkbookPaths {
        balanced: output_dir.join("balanced.csv"),
        action_report: output_dir.join("action_report.csv"),
        summary: output_dir.join("summary.csv"),
        final_ready: output_dir.join("final_ready.csv"),
        report_json: output_dir.join("report.json"),
    };

    let corrected: Vec<&Row> = report.corrected.iter().map(|labeled| &labeled.cells).collect();
    write_sheet(&paths.balanced, headers, corrected.into_iter())?;

    let mut action_headers: Vec<String> = headers.to_vec();
    action_headers.push("Action".to_string());
    let labeled: Vec<Row> = report
        .corrected
        .iter()
        .map(|labeled| {
            let mut cells = labeled.cells.clone();
            cells.resize(headers.len().max(cells.len()), String::new());
            cells.push(labeled.label.to_string());
            cells
        })
        .collect();
    write_sheet(&paths.action_report, &action_headers, labeled.iter())?;

    let summary_headers: Vec<String> =
        SUMMARY_HEADERS.iter().map(|header| (*header).to_string()).collect();
    let summary = summary_rows(&report.groups);
    write_sheet(&paths.summary, &summary_headers, summary.iter())?;

    write_sheet(&paths.final_ready, headers, report.final_rows.iter())?;

    let file = File::create(&paths.report_json)
        .with_context(|| format!("create {}", paths.report_json.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", paths.report_json.display()))?;

    info!(
        output_dir = %output_dir.display(),
        corrected = report.corrected.len(),
        final_rows = report.final_rows.len(),
        "wrote workbook"
    );
    Ok(paths)
}

fn write_sheet<'a>(
    path: &Path,
    headers: &[String],
    rows: impl Iterator<Item = &'a Row>,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create sheet {}", path.display()))?;
    writer
        .write_record(headers)
        .with_context(|| format!("write header of {}", path.display()))?;
    for row in rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row of {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
