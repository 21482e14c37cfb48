//! Debarker Processor Library
//!
//! A Rust library for processing fixed-format text exports from
//! log-truck/debarker measurement devices.
//!
//! This library provides tools for:
//! - Parsing device exports with header/totals/row-table/metadata sections
//! - Decoding uploads with a legacy Windows-1252 fallback
//! - Archiving parsed batches in a durable JSON file keyed by filename
//! - Re-reading, deleting, and exporting archived batches
//! - Rendering batch log tables to `.xlsx` spreadsheets

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archive_store;
        pub mod record_parser;
        pub mod spreadsheet_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ArchiveEntry, BatchRecord, LogRow};
pub use app::services::archive_store::ArchiveStore;
pub use config::Config;
pub use error::{Error, Result};
