//! Archive store implementation
//!
//! Read path: durable file -> snapshot cache -> caller. Write path:
//! read-modify-write of the complete mapping, persisted with a temp file
//! rename so no partial mapping is ever observable, then cache invalidation.

use serde::Serialize;
use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::app::models::{ArchiveEntry, BatchRecord};
use crate::config::Config;
use crate::error::{Error, Result};

/// Borrowed serialization view of one archive entry, so persisting does not
/// clone every record.
#[derive(Serialize)]
struct WireEntry<'a> {
    data: &'a BatchRecord,
}

/// Durable filename -> batch record store backed by a single JSON file.
///
/// The store owns an in-memory snapshot of the durable state. `put` and
/// `delete` perform read-modify-write-invalidate as one logical operation;
/// a missing, empty, or unreadable durable file reads as an empty archive.
#[derive(Debug)]
pub struct ArchiveStore {
    /// Path of the durable archive file
    path: PathBuf,

    /// Snapshot of the last durable state read; `None` when invalidated
    cache: RwLock<Option<HashMap<String, BatchRecord>>>,
}

impl ArchiveStore {
    /// Create a store over the given durable file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a store from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.archive_path.clone())
    }

    /// Path of the durable archive file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the current archive contents, keyed by upload filename.
    ///
    /// Reflects the latest successful `put`/`delete`. An absent, empty, or
    /// malformed durable file is an empty archive, never an error.
    pub fn get_all(&self) -> Result<HashMap<String, BatchRecord>> {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());

        if cache.is_none() {
            *cache = Some(self.load_durable()?);
        }

        Ok(cache.clone().unwrap_or_default())
    }

    /// Archive a parsed record under its upload filename.
    ///
    /// Overwrites any existing entry with the same filename. The complete
    /// mapping is rewritten atomically and the read cache is invalidated.
    pub fn put(&self, filename: &str, record: BatchRecord) -> Result<()> {
        let mut entries = self.get_all()?;
        let replaced = entries.insert(filename.to_string(), record).is_some();

        self.persist(&entries)?;
        self.invalidate_cache();

        info!(
            "Archived '{}' ({}); archive now holds {} record(s)",
            filename,
            if replaced { "overwrote existing entry" } else { "new entry" },
            entries.len()
        );
        Ok(())
    }

    /// Remove an archived record.
    ///
    /// Returns `false` without touching durable state when the filename is
    /// not archived; otherwise persists the reduced mapping, invalidates the
    /// cache, and returns `true`.
    pub fn delete(&self, filename: &str) -> Result<bool> {
        let mut entries = self.get_all()?;

        if entries.remove(filename).is_none() {
            debug!("Delete of unarchived filename '{}' is a no-op", filename);
            return Ok(false);
        }

        self.persist(&entries)?;
        self.invalidate_cache();

        info!(
            "Deleted '{}'; archive now holds {} record(s)",
            filename,
            entries.len()
        );
        Ok(true)
    }

    /// Drop the in-memory snapshot so the next read goes to durable state.
    pub fn invalidate_cache(&self) {
        *self.cache.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Read the durable archive file into a fresh mapping.
    fn load_durable(&self) -> Result<HashMap<String, BatchRecord>> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Archive file {} not found, starting empty", self.path.display());
                return Ok(HashMap::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        if raw.is_empty() {
            return Ok(HashMap::new());
        }

        match serde_json::from_slice::<HashMap<String, ArchiveEntry>>(&raw) {
            Ok(entries) => Ok(entries.into_iter().map(|(k, v)| (k, v.data)).collect()),
            Err(e) => {
                warn!(
                    "Archive file {} is unreadable ({}); treating as empty",
                    self.path.display(),
                    e
                );
                Ok(HashMap::new())
            }
        }
    }

    /// Rewrite the complete mapping to durable storage.
    ///
    /// Serializes next to the target and renames over it, so a failure
    /// mid-write leaves the previous durable state intact.
    fn persist(&self, entries: &HashMap<String, BatchRecord>) -> Result<()> {
        let wire: HashMap<&str, WireEntry<'_>> = entries
            .iter()
            .map(|(filename, record)| (filename.as_str(), WireEntry { data: record }))
            .collect();
        let json = serde_json::to_vec(&wire)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(
            "Persisted {} record(s) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
