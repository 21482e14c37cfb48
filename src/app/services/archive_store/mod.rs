//! Durable archive of parsed batch records
//!
//! The archive is a single JSON file mapping upload filename to its parsed
//! [`BatchRecord`], read through an in-memory snapshot cache that is
//! invalidated wholesale after every successful write or delete. Callers
//! therefore always observe the latest durable state.
//!
//! [`BatchRecord`]: crate::app::models::BatchRecord

pub mod store;

// Re-export main types for easy access
pub use store::ArchiveStore;
