//! Tests for upload text decoding

use crate::app::services::record_parser::decoder::decode_export_text;

#[test]
fn test_decodes_plain_utf8() {
    let text = decode_export_text("Operador: João".as_bytes()).unwrap();
    assert_eq!(text, "Operador: João");
}

#[test]
fn test_falls_back_to_windows_1252() {
    // "João" in ISO-8859-1: 0xE3 is not valid UTF-8 in this position
    let bytes = b"Jo\xE3o";
    let text = decode_export_text(bytes).unwrap();
    assert_eq!(text, "João");
}

#[test]
fn test_decodes_empty_input() {
    let text = decode_export_text(b"").unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_legacy_export_line_round_trips() {
    // A full metadata line as an older device would write it
    let bytes = b"Turno: Manh\xE3";
    let text = decode_export_text(bytes).unwrap();
    assert_eq!(text, "Turno: Manhã");
}
