//! Workbook generation for batch exports

use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::debug;

use crate::app::models::BatchRecord;
use crate::constants::{
    EXPORT_COLUMNS, EXPORT_INDEX_LABEL, EXPORT_SHEET_NAME, SPREADSHEET_EXTENSION,
};
use crate::error::Result;

/// Render a batch record's log rows to an `.xlsx` workbook in memory.
///
/// The sheet carries one header row followed by one row per log entry; the
/// index column is 0-based, matching the archives produced by the previous
/// generation of this tool.
pub fn write_batch_workbook(record: &BatchRecord) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    worksheet.write_string(0, 0, EXPORT_INDEX_LABEL)?;
    for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16 + 1, *header)?;
    }

    for (index, row) in record.log_rows.iter().enumerate() {
        let sheet_row = index as u32 + 1;
        worksheet.write_number(sheet_row, 0, index as f64)?;
        worksheet.write_string(sheet_row, 1, &row.box_id)?;
        worksheet.write_string(sheet_row, 2, &row.quantity)?;
        worksheet.write_string(sheet_row, 3, &row.volume)?;
    }

    let buffer = workbook.save_to_buffer()?;
    debug!(
        "Rendered workbook with {} data row(s) ({} bytes)",
        record.row_count(),
        buffer.len()
    );
    Ok(buffer)
}

/// Derive the download filename for an export: the source filename with its
/// extension replaced by the spreadsheet extension.
pub fn export_filename(source_filename: &str) -> String {
    Path::new(source_filename)
        .with_extension(SPREADSHEET_EXTENSION)
        .to_string_lossy()
        .into_owned()
}
