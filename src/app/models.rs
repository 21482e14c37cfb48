//! Core data structures for debarker export processing.
//!
//! Defines the parsed batch record, its log row entries, and the archive
//! entry wrapper used by the durable JSON format. Field names on the wire
//! keep the device vendor's Portuguese identifiers for compatibility with
//! archives written by earlier tooling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One measured log/bin entry of a batch: box identifier, piece count, and
/// volume in cubic meters. All fields are kept as raw text; no numeric
/// coercion happens at parse time.
///
/// Serialized as a 3-element string array (`["A1", "10", "5.5"]`), matching
/// the durable archive format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct LogRow {
    /// Box/bin identifier
    pub box_id: String,
    /// Piece count
    pub quantity: String,
    /// Volume (M3)
    pub volume: String,
}

impl LogRow {
    /// Create a log row from its three positional fields
    pub fn new(
        box_id: impl Into<String>,
        quantity: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            box_id: box_id.into(),
            quantity: quantity.into(),
            volume: volume.into(),
        }
    }
}

impl From<[String; 3]> for LogRow {
    fn from([box_id, quantity, volume]: [String; 3]) -> Self {
        Self {
            box_id,
            quantity,
            volume,
        }
    }
}

impl From<LogRow> for [String; 3] {
    fn from(row: LogRow) -> Self {
        [row.box_id, row.quantity, row.volume]
    }
}

/// One parsed device export: a truck/load measurement session.
///
/// Immutable once parsed. Dates, times, and totals are free-form strings;
/// the device's formats vary and consumers decide how to interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Batch start date
    #[serde(rename = "data_inicio")]
    pub start_date: String,

    /// Batch start time
    #[serde(rename = "hora_inicio")]
    pub start_time: String,

    /// Batch end date
    #[serde(rename = "data_fim")]
    pub end_date: String,

    /// Batch end time
    #[serde(rename = "hora_fim")]
    pub end_time: String,

    /// First batch total (piece count as reported by the device)
    #[serde(rename = "valor_1")]
    pub total_value_1: String,

    /// Second batch total (total volume as reported by the device)
    #[serde(rename = "valor_2")]
    pub total_value_2: String,

    /// Measured log rows, in order of appearance in the export
    #[serde(rename = "dados_troncos")]
    pub log_rows: Vec<LogRow>,

    /// Key-value metadata from the export tail (operator, shift, ...)
    #[serde(rename = "metadados")]
    pub metadata: HashMap<String, String>,
}

impl BatchRecord {
    /// Number of measured log rows in this batch
    pub fn row_count(&self) -> usize {
        self.log_rows.len()
    }
}

/// Envelope around a batch record as stored in the durable archive file.
///
/// The archive is a single JSON object mapping filename to `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// The parsed batch record
    pub data: BatchRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BatchRecord {
        BatchRecord {
            start_date: "01/01/2024".to_string(),
            start_time: "08:00".to_string(),
            end_date: "01/01/2024".to_string(),
            end_time: "17:00".to_string(),
            total_value_1: "100".to_string(),
            total_value_2: "250".to_string(),
            log_rows: vec![LogRow::new("A1", "10", "5.5")],
            metadata: HashMap::from([("Operador".to_string(), "João".to_string())]),
        }
    }

    #[test]
    fn test_log_row_serializes_as_array() {
        let row = LogRow::new("A1", "10", "5.5");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["A1","10","5.5"]"#);
    }

    #[test]
    fn test_log_row_deserializes_from_array() {
        let row: LogRow = serde_json::from_str(r#"["B2","20","11.0"]"#).unwrap();
        assert_eq!(row, LogRow::new("B2", "20", "11.0"));
    }

    #[test]
    fn test_batch_record_wire_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["data_inicio"], "01/01/2024");
        assert_eq!(json["hora_inicio"], "08:00");
        assert_eq!(json["valor_1"], "100");
        assert_eq!(json["valor_2"], "250");
        assert_eq!(json["dados_troncos"][0][2], "5.5");
        assert_eq!(json["metadados"]["Operador"], "João");
    }

    #[test]
    fn test_archive_entry_envelope() {
        let entry = ArchiveEntry {
            data: sample_record(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("data").is_some());

        let back: ArchiveEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
