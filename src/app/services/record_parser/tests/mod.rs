//! Test utilities and fixtures for record parser testing
//!
//! Provides canonical device export fixtures shared across the parser test
//! modules.

// Test modules
mod decoder_tests;
mod parser_tests;

/// A complete, well-formed device export with two log rows and two metadata
/// entries.
pub fn complete_export() -> String {
    [
        "01/01/2024~08:00~01/01/2024~17:00",
        "100~250",
        "A1~10~5.5",
        "A2~20~11.0",
        "",
        "Operador: João",
        "Turno: Manhã",
    ]
    .join("\n")
}

/// An export whose row section runs to end-of-file with no metadata tail.
pub fn export_without_metadata() -> String {
    [
        "02/03/2024~06:30~02/03/2024~15:10",
        "42~99.9",
        "B1~5~2.2",
        "B2~7~3.1",
    ]
    .join("\n")
}
