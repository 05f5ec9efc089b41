//! Run report output: workbook sheets and the JSON run report.

pub mod summary;
pub mod workbook;

pub use summary::{SUMMARY_HEADERS, summary_rows};
pub use workbook::{WorkbookPaths, write_workbook};
