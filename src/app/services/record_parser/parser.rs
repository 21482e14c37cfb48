//! Structural parsing of device exports into batch records
//!
//! Parsing is line-oriented over the decoded text. The header and totals
//! lines are mandatory; the row table runs until a blank line or the first
//! metadata line; the remaining tail is scanned for `key: value` pairs.
//! A failed parse never yields a partially populated record.

use std::collections::HashMap;
use tracing::{debug, trace};

use super::decoder::decode_export_text;
use crate::app::models::{BatchRecord, LogRow};
use crate::constants::{
    FIELD_SEPARATOR, FIRST_ROW_LINE, HEADER_FIELD_COUNT, LOG_ROW_FIELD_COUNT, METADATA_SEPARATOR,
    TOTALS_FIELD_COUNT,
};
use crate::error::{Error, Result};

/// Parse the raw bytes of one uploaded device export into a [`BatchRecord`].
pub fn parse_export(bytes: &[u8]) -> Result<BatchRecord> {
    let text = decode_export_text(bytes)?;
    parse_export_text(&text)
}

/// Parse already-decoded export text into a [`BatchRecord`].
pub fn parse_export_text(text: &str) -> Result<BatchRecord> {
    let lines: Vec<&str> = text.split('\n').collect();

    let (start_date, start_time, end_date, end_time) =
        parse_header_line(lines.first().copied().unwrap_or_default())?;
    let (total_value_1, total_value_2) = parse_totals_line(lines.get(1).copied())?;

    // Row section: every line from index 2 until a blank line or the first
    // metadata line. The terminating line is not consumed as a row.
    let mut log_rows = Vec::new();
    let mut tail_start = lines.len();

    for (index, raw_line) in lines.iter().enumerate().skip(FIRST_ROW_LINE) {
        let line = raw_line.trim();
        if line.is_empty() || line.contains(METADATA_SEPARATOR) {
            tail_start = index;
            break;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() >= LOG_ROW_FIELD_COUNT {
            log_rows.push(LogRow::new(fields[0], fields[1], fields[2]));
        } else {
            // Short rows are device noise (e.g. truncated last line), not a
            // fatal condition.
            debug!(
                "Skipping log row line {} with {} field(s), expected {}",
                index,
                fields.len(),
                LOG_ROW_FIELD_COUNT
            );
        }
    }

    // Metadata tail: resumes at the literal line where the row scan stopped,
    // so skipped short rows cannot misalign the boundary.
    let metadata = parse_metadata_tail(&lines[tail_start..]);

    trace!(
        "Parsed export: {} log rows, {} metadata entries",
        log_rows.len(),
        metadata.len()
    );

    Ok(BatchRecord {
        start_date,
        start_time,
        end_date,
        end_time,
        total_value_1,
        total_value_2,
        log_rows,
        metadata,
    })
}

/// Parse line 0 into the four header fields.
///
/// The line must split into exactly four `~`-separated fields; both fewer
/// and extra fields reject the upload.
fn parse_header_line(line: &str) -> Result<(String, String, String, String)> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();

    if fields.len() != HEADER_FIELD_COUNT {
        return Err(Error::MalformedHeader {
            found: fields.len(),
        });
    }

    Ok((
        fields[0].to_string(),
        fields[1].to_string(),
        fields[2].to_string(),
        fields[3].to_string(),
    ))
}

/// Parse line 1 into the two batch totals.
///
/// At least two `~`-separated fields are required; only the first two are
/// kept.
fn parse_totals_line(line: Option<&str>) -> Result<(String, String)> {
    let line = line.ok_or(Error::MalformedTotals { found: 0 })?;
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();

    if fields.len() < TOTALS_FIELD_COUNT {
        return Err(Error::MalformedTotals {
            found: fields.len(),
        });
    }

    Ok((fields[0].to_string(), fields[1].to_string()))
}

/// Collect `key: value` pairs from the tail lines.
///
/// Splits on the first separator occurrence, trims both sides, and lets
/// later duplicates overwrite earlier ones. Lines without a separator are
/// ignored.
fn parse_metadata_tail(lines: &[&str]) -> HashMap<String, String> {
    let mut metadata = HashMap::new();

    for line in lines {
        if let Some((key, value)) = line.split_once(METADATA_SEPARATOR) {
            metadata.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    metadata
}
