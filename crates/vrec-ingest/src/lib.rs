//! Catalog ingestion: CSV tables, column resolution, override files.

pub mod columns;
pub mod csv_table;
pub mod overrides_file;

pub use columns::{detect_price_column, detect_quantity_column, resolve_column};
pub use csv_table::{CsvTable, read_csv_table};
pub use overrides_file::read_overrides;
