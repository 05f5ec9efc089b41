//! CLI argument definitions for the variant reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vrec",
    version,
    about = "Variant catalog reconciler - detect and fill missing product variants",
    long_about = "Check a product catalog for structural completeness.\n\n\
                  For every product, every combination of its observed option values\n\
                  should exist as a row; missing combinations are detected, reported,\n\
                  and synthesized into a corrected dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a catalog file and write the corrected workbook.
    Reconcile(ReconcileArgs),

    /// List the columns of a catalog file with detected roles.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the catalog CSV file (first row is the header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the product identifier (header name or 0-based index).
    #[arg(long = "id-column", value_name = "COLUMN")]
    pub id_column: String,

    /// Option column, repeatable; order fixes dimension order.
    #[arg(long = "option-column", value_name = "COLUMN", required = true)]
    pub option_columns: Vec<String>,

    /// Column blanked on synthesized rows (serials, barcodes), repeatable.
    #[arg(long = "clear-column", value_name = "COLUMN")]
    pub clear_columns: Vec<String>,

    /// Category column for the final-file partitioning pass.
    #[arg(long = "category-column", value_name = "COLUMN")]
    pub category_column: Option<String>,

    /// Product-name column for the category consistency check.
    #[arg(long = "name-column", value_name = "COLUMN")]
    pub name_column: Option<String>,

    /// Price column (auto-detected from headers when omitted).
    #[arg(long = "price-column", value_name = "COLUMN")]
    pub price_column: Option<String>,

    /// Quantity column (auto-detected from headers when omitted).
    #[arg(long = "quantity-column", value_name = "COLUMN")]
    pub quantity_column: Option<String>,

    /// JSON file with manual price/quantity overrides.
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Output directory for generated sheets (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How many top missing values to report.
    #[arg(long = "top-n", value_name = "N", default_value_t = 10)]
    pub top_n: usize,

    /// Reconcile and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the catalog CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
