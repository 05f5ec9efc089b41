//! Command entry points wired from the CLI arguments.

use std::io::IsTerminal;

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use vrec_cli::pipeline;
use vrec_cli::types::{ColumnSelection, ReconcileRequest, RunOutcome};
use vrec_ingest::{detect_price_column, detect_quantity_column};

use crate::cli::{ColumnsArgs, ReconcileArgs};

pub fn run_reconcile(args: &ReconcileArgs) -> Result<RunOutcome> {
    let request = ReconcileRequest {
        input: args.input.clone(),
        selection: ColumnSelection {
            identifier: args.id_column.clone(),
            options: args.option_columns.clone(),
            clear: args.clear_columns.clone(),
            category: args.category_column.clone(),
            name: args.name_column.clone(),
            price: args.price_column.clone(),
            quantity: args.quantity_column.clone(),
        },
        overrides_file: args.overrides.clone(),
        output_dir: args.output_dir.clone(),
        top_n: args.top_n,
        dry_run: args.dry_run,
        show_progress: std::io::stderr().is_terminal(),
    };
    pipeline::run(&request)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let table = pipeline::load_table(&args.input)?;
    let price = detect_price_column(&table.headers);
    let quantity = detect_quantity_column(&table.headers);

    let mut output = Table::new();
    output.load_preset(UTF8_FULL_CONDENSED);
    output.set_content_arrangement(ContentArrangement::Dynamic);
    output.set_header(vec!["Index", "Header", "Detected Role"]);
    for (index, header) in table.headers.iter().enumerate() {
        let role = if Some(index) == price {
            "price"
        } else if Some(index) == quantity {
            "quantity"
        } else {
            ""
        };
        output.add_row(vec![index.to_string(), header.clone(), role.to_string()]);
    }
    println!("{output}");
    Ok(())
}
