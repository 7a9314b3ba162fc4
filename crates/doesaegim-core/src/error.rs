//! Error types shared by storage and view models

use thiserror::Error;

/// Result alias for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Any failure of the underlying persistence layer, read or write
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite reported an error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem error while opening the database
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored row could not be decoded
    #[error("corrupt record: {0}")]
    CorruptRecord(String),

    /// The referenced record does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

/// Section/row coordinates that do not exist in the current list
///
/// Returned by lookups that must not silently answer with wrong data.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("section {section} out of range ({len} sections)")]
    Section { section: usize, len: usize },

    #[error("row {row} out of range in section {section} ({len} rows)")]
    Row { section: usize, row: usize, len: usize },
}
