//! Spreadsheet export of archived batch records
//!
//! Renders a batch's log row table to an in-memory `.xlsx` workbook in the
//! layout the downstream office tooling expects: a single `Sheet1`, a
//! numeric row-index column labelled `Linha`, and the `BOX`, `Quantidade`,
//! `M3` data columns.

pub mod writer;

// Re-export main entry points for easy access
pub use writer::{export_filename, write_batch_workbook};
