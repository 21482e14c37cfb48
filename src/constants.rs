//! Application constants for the debarker processor
//!
//! This module contains the wire-format separators, archive file naming,
//! and spreadsheet layout constants used throughout the application.

// =============================================================================
// Device Export Format
// =============================================================================

/// Separator between positional fields within a line of a device export
pub const FIELD_SEPARATOR: char = '~';

/// Separator marking a key-value metadata line in the export tail
pub const METADATA_SEPARATOR: char = ':';

/// Number of fields the header line must carry (start date/time, end date/time)
pub const HEADER_FIELD_COUNT: usize = 4;

/// Minimum number of fields on the totals line
pub const TOTALS_FIELD_COUNT: usize = 2;

/// Number of positional fields kept per log row (box, quantity, volume)
pub const LOG_ROW_FIELD_COUNT: usize = 3;

/// Line index at which candidate log rows start
pub const FIRST_ROW_LINE: usize = 2;

// =============================================================================
// Archive Storage
// =============================================================================

/// Default durable archive file name (relative to the working directory)
pub const DEFAULT_ARCHIVE_FILE: &str = "archive.json";

/// File extension the device uses for exports
pub const EXPORT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Spreadsheet Export
// =============================================================================

/// Worksheet name for exported batches
pub const EXPORT_SHEET_NAME: &str = "Sheet1";

/// Label of the row-index column
pub const EXPORT_INDEX_LABEL: &str = "Linha";

/// Data column headers, in order, for the log row table
pub const EXPORT_COLUMNS: &[&str] = &["BOX", "Quantidade", "M3"];

/// Extension used for exported spreadsheets
pub const SPREADSHEET_EXTENSION: &str = "xlsx";
