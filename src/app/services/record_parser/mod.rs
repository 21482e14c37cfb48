//! Parser for fixed-format debarker measurement exports
//!
//! Device exports are small line-oriented text files with three sections:
//! a header line (`start date ~ start time ~ end date ~ end time`), a totals
//! line (piece count and total volume), a table of `~`-separated log rows,
//! and a tail of `key: value` metadata lines.
//!
//! ## Architecture
//!
//! The parser is organized into two components:
//! - [`decoder`] - Text decoding with legacy single-byte fallback
//! - [`parser`] - Line-oriented structural parsing into a [`BatchRecord`]
//!
//! ## Usage
//!
//! ```rust
//! use debarker_processor::app::services::record_parser;
//!
//! let bytes = b"01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10~5.5\n";
//! let record = record_parser::parse_export(bytes)?;
//! assert_eq!(record.row_count(), 1);
//! # Ok::<(), debarker_processor::Error>(())
//! ```
//!
//! [`BatchRecord`]: crate::app::models::BatchRecord

pub mod decoder;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use decoder::decode_export_text;
pub use parser::parse_export;
