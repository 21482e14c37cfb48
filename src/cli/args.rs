//! Command-line argument definitions for the debarker processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the debarker export processor
///
/// Ingests fixed-format measurement exports from a log-truck/debarker
/// device, archives the parsed batches, and exports them to spreadsheets.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "debarker_processor",
    version,
    about = "Parse, archive, and export debarker/log-truck measurement batches",
    long_about = "Processes the fixed-format text exports produced by log-truck/debarker \
                  measurement devices: each upload is parsed into a batch record (dates, \
                  totals, measured log rows, operator metadata), archived in a durable JSON \
                  file keyed by filename, and can later be listed, re-viewed, deleted, or \
                  exported to an .xlsx spreadsheet."
)]
pub struct Args {
    /// Path of the durable archive file
    ///
    /// Defaults to ./archive.json. All commands operate on the same file.
    #[arg(
        long = "archive",
        value_name = "FILE",
        global = true,
        help = "Path of the durable archive file (default: ./archive.json)"
    )]
    pub archive_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the debarker processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse device export file(s) and archive the resulting batches
    Ingest(IngestArgs),
    /// List archived batches
    List,
    /// Display an archived batch (header, totals, log rows, metadata)
    Show(ShowArgs),
    /// Delete an archived batch
    Delete(DeleteArgs),
    /// Export an archived batch to an .xlsx spreadsheet
    Export(ExportArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Export files to ingest
    #[arg(value_name = "FILE", help = "Device export file(s) to parse and archive")]
    pub files: Vec<PathBuf>,

    /// Directory to scan for .txt exports
    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Ingest every .txt file found under this directory"
    )]
    pub dir: Option<PathBuf>,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Archived filename to display
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}

/// Arguments for the delete command
#[derive(Debug, Clone, Parser)]
pub struct DeleteArgs {
    /// Archived filename to delete
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Archived filename to export
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Output path for the spreadsheet
    ///
    /// Defaults to the archived filename with its extension replaced by
    /// .xlsx, in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the spreadsheet"
    )]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Build the application configuration from the CLI flags
    pub fn config(&self) -> Config {
        match &self.archive_path {
            Some(path) => Config::default().with_archive_path(path.clone()),
            None => Config::default(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() && self.dir.is_none() {
            return Err(Error::configuration(
                "Nothing to ingest: pass export file(s) or --dir".to_string(),
            ));
        }

        for file in &self.files {
            if !file.is_file() {
                return Err(Error::configuration(format!(
                    "Export file does not exist: {}",
                    file.display()
                )));
            }
        }

        if let Some(dir) = &self.dir {
            if !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Ingest directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
