//! Tests for structural export parsing

use super::{complete_export, export_without_metadata};
use crate::app::models::LogRow;
use crate::app::services::record_parser::{parse_export, parser::parse_export_text};
use crate::error::Error;

#[test]
fn test_parses_complete_export() {
    let record = parse_export_text(&complete_export()).unwrap();

    assert_eq!(record.start_date, "01/01/2024");
    assert_eq!(record.start_time, "08:00");
    assert_eq!(record.end_date, "01/01/2024");
    assert_eq!(record.end_time, "17:00");
    assert_eq!(record.total_value_1, "100");
    assert_eq!(record.total_value_2, "250");
    assert_eq!(
        record.log_rows,
        vec![LogRow::new("A1", "10", "5.5"), LogRow::new("A2", "20", "11.0")]
    );
    assert_eq!(record.metadata.len(), 2);
    assert_eq!(record.metadata["Operador"], "João");
    assert_eq!(record.metadata["Turno"], "Manhã");
}

#[test]
fn test_parses_export_without_metadata_tail() {
    let record = parse_export_text(&export_without_metadata()).unwrap();

    assert_eq!(record.log_rows.len(), 2);
    assert!(record.metadata.is_empty());
}

#[test]
fn test_header_with_too_few_fields_is_rejected() {
    let result = parse_export_text("01/01/2024~08:00~01/01/2024\n100~250\n");
    assert!(matches!(
        result,
        Err(Error::MalformedHeader { found: 3 })
    ));
}

#[test]
fn test_header_with_extra_fields_is_rejected() {
    let result = parse_export_text("a~b~c~d~e\n100~250\n");
    assert!(matches!(
        result,
        Err(Error::MalformedHeader { found: 5 })
    ));
}

#[test]
fn test_missing_totals_line_is_rejected() {
    let result = parse_export_text("01/01/2024~08:00~01/01/2024~17:00");
    assert!(matches!(result, Err(Error::MalformedTotals { found: 0 })));
}

#[test]
fn test_totals_with_single_field_is_rejected() {
    let result = parse_export_text("01/01/2024~08:00~01/01/2024~17:00\n100\n");
    assert!(matches!(result, Err(Error::MalformedTotals { found: 1 })));
}

#[test]
fn test_totals_extra_fields_keep_first_two() {
    let record =
        parse_export_text("01/01/2024~08:00~01/01/2024~17:00\n100~250~extra~fields\n").unwrap();
    assert_eq!(record.total_value_1, "100");
    assert_eq!(record.total_value_2, "250");
}

#[test]
fn test_short_row_is_skipped_silently() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10~5.5\nA2~20\nA3~30~9.0\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(
        record.log_rows,
        vec![LogRow::new("A1", "10", "5.5"), LogRow::new("A3", "30", "9.0")]
    );
}

#[test]
fn test_wide_row_keeps_first_three_fields() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10~5.5~extra~junk\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.log_rows, vec![LogRow::new("A1", "10", "5.5")]);
}

#[test]
fn test_metadata_line_terminates_row_section() {
    // No blank separator: the first ':' line both terminates the table and
    // is collected as metadata.
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10~5.5\nOperador: Ana\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.log_rows, vec![LogRow::new("A1", "10", "5.5")]);
    assert_eq!(record.metadata["Operador"], "Ana");
}

#[test]
fn test_metadata_splits_on_first_separator_only() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\n\nInício: 08:30:15\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.metadata["Início"], "08:30:15");
}

#[test]
fn test_duplicate_metadata_key_last_wins() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\n\nTurno: Manhã\nTurno: Tarde\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.metadata.len(), 1);
    assert_eq!(record.metadata["Turno"], "Tarde");
}

#[test]
fn test_tail_lines_without_separator_are_ignored() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\n\nOperador: Ana\nfim de registo\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.metadata.len(), 1);
}

#[test]
fn test_skipped_rows_do_not_shift_metadata_boundary() {
    // Two short rows are skipped; the metadata tail must still start at the
    // blank line, not two lines earlier.
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10\nA2~20\nA3~30~9.0\n\nOperador: Rui\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.log_rows, vec![LogRow::new("A3", "30", "9.0")]);
    assert_eq!(record.metadata.len(), 1);
    assert_eq!(record.metadata["Operador"], "Rui");
}

#[test]
fn test_empty_input_is_rejected_as_malformed_header() {
    assert!(matches!(
        parse_export_text(""),
        Err(Error::MalformedHeader { found: 1 })
    ));
}

#[test]
fn test_empty_row_section_is_valid() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\n100~250\n\nOperador: Ana\n";
    let record = parse_export_text(text).unwrap();

    assert!(record.log_rows.is_empty());
    assert_eq!(record.metadata["Operador"], "Ana");
}

#[test]
fn test_parse_export_decodes_legacy_bytes() {
    let mut bytes = b"01/01/2024~08:00~01/01/2024~17:00\n100~250\nA1~10~5.5\n\n".to_vec();
    bytes.extend_from_slice(b"Operador: Jo\xE3o\n");

    let record = parse_export(&bytes).unwrap();
    assert_eq!(record.metadata["Operador"], "João");
}

#[test]
fn test_crlf_line_endings_are_tolerated() {
    let text = "01/01/2024~08:00~01/01/2024~17:00\r\n100~250\r\nA1~10~5.5\r\n\r\nTurno: Manhã\r\n";
    let record = parse_export_text(text).unwrap();

    assert_eq!(record.end_time, "17:00");
    assert_eq!(record.log_rows, vec![LogRow::new("A1", "10", "5.5")]);
    assert_eq!(record.metadata["Turno"], "Manhã");
}
