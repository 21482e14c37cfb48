//! Configuration management for the debarker processor.
//!
//! Provides the configuration structure consumed by the archive store and
//! the CLI, with sensible defaults for standalone use.

use crate::constants::DEFAULT_ARCHIVE_FILE;
use std::path::PathBuf;

/// Global configuration for debarker export processing
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the durable archive file
    pub archive_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_FILE),
        }
    }
}

impl Config {
    /// Create a configuration with a custom archive path
    pub fn with_archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }
}
