//! Error handling for debarker export processing.
//!
//! Provides a unified error type covering text decoding, structural parsing,
//! archive persistence, and spreadsheet export failures.

use thiserror::Error;

/// Result type alias for the debarker processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for debarker export processing operations
#[derive(Error, Debug)]
pub enum Error {
    /// Neither supported text encoding could decode the upload bytes
    #[error("Could not decode file contents as UTF-8 or Windows-1252")]
    Encoding,

    /// First line did not split into the four expected header fields
    #[error("Malformed header line: expected 4 '~'-separated fields, found {found}")]
    MalformedHeader { found: usize },

    /// Second line did not carry the two expected batch totals
    #[error("Malformed totals line: expected at least 2 '~'-separated fields, found {found}")]
    MalformedTotals { found: usize },

    /// Any other structural expectation violated while parsing
    #[error("Malformed record: {reason}")]
    Malformed { reason: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive serialization failed on the write path
    #[error("Archive serialization error: {0}")]
    ArchiveSerialization(#[from] serde_json::Error),

    /// Spreadsheet workbook generation failed
    #[error("Spreadsheet writing error: {0}")]
    SpreadsheetWriting(#[from] rust_xlsxwriter::XlsxError),

    /// Requested filename is not present in the archive
    #[error("No archived record for filename: {filename}")]
    RecordNotFound { filename: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a generic malformed-record error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Create a record-not-found error
    pub fn record_not_found(filename: impl Into<String>) -> Self {
        Self::RecordNotFound {
            filename: filename.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the parse-failure variants that are surfaced to the user as
    /// a rejected upload rather than a processing fault.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Error::Encoding
                | Error::MalformedHeader { .. }
                | Error::MalformedTotals { .. }
                | Error::Malformed { .. }
        )
    }
}
