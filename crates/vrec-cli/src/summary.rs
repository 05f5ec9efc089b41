//! Console summary of a reconciliation run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vrec_cli::types::RunOutcome;
use vrec_model::{GroupRecord, GroupStatus};

pub fn print_summary(outcome: &RunOutcome) {
    if let Some(paths) = &outcome.paths {
        println!("Output: {}", outcome.output_dir.display());
        println!("Report: {}", paths.report_json.display());
    } else {
        println!("Dry run, no files written.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Identifier"),
        header_cell("Dim 1"),
        header_cell("Dim 2"),
        header_cell("Detail"),
        header_cell("Status"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for record in &outcome.report.groups {
        table.add_row(vec![
            Cell::new(&record.identifier),
            dimension_cell(record, 0),
            dimension_cell(record, 1),
            Cell::new(&record.detail),
            status_cell(record.status),
            Cell::new(record.missing_count),
        ]);
    }
    println!("{table}");

    let stats = &outcome.report.stats;
    println!(
        "Groups: {} total, {} balanced, {} unbalanced, {} skipped, {} errored",
        stats.total_groups,
        stats.balanced_groups,
        stats.unbalanced_groups,
        stats.skipped_groups,
        stats.error_groups
    );
    println!("Synthesized rows: {}", stats.synthesized_rows);

    if !stats.top_missing_values.is_empty() {
        let mut missing = Table::new();
        missing.set_header(vec![header_cell("Missing Value"), header_cell("Count")]);
        apply_table_style(&mut missing);
        align_column(&mut missing, 1, CellAlignment::Right);
        for entry in &stats.top_missing_values {
            missing.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
        }
        println!("{missing}");
    }
}

fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dimension_cell(record: &GroupRecord, index: usize) -> Cell {
    match record.dimension_sizes.get(index) {
        Some(size) => Cell::new(size),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn status_cell(status: GroupStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        GroupStatus::Balanced => cell.fg(Color::Green),
        GroupStatus::Unbalanced => cell.fg(Color::Yellow),
        GroupStatus::Skipped => cell.fg(Color::DarkGrey),
        GroupStatus::StaticOption | GroupStatus::TooManyCombinations => cell.fg(Color::Red),
    }
}
