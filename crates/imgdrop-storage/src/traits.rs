//! Storage abstraction trait
//!
//! This module defines the Storage trait the upload pipeline writes
//! through. Backends adopt already-validated temporary files under
//! generated names; they never inspect file content.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Directory creation failed: {0}")]
    DirectoryCreation(String),

    #[error("Persist failed: {0}")]
    PersistFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid stored name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The validator drives this seam: `ensure_root` runs at the head of every
/// call and `adopt` performs the single persisting side effect. The
/// remaining methods are the maintenance surface used by callers and
/// tests.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create the backing directory if it does not exist yet.
    ///
    /// A pre-existing directory is not an error; creation is idempotent
    /// against concurrent callers.
    async fn ensure_root(&self) -> StorageResult<()>;

    /// Move a temporary file into the store under `stored_name` and return
    /// the final path.
    ///
    /// The move is atomic when source and target share a filesystem.
    async fn adopt(&self, temp_path: &Path, stored_name: &str) -> StorageResult<PathBuf>;

    /// Check whether a stored file exists.
    async fn exists(&self, stored_name: &str) -> StorageResult<bool>;

    /// Read a stored file's contents.
    async fn read(&self, stored_name: &str) -> StorageResult<Vec<u8>>;

    /// Delete a stored file. Deleting an absent file is not an error.
    async fn delete(&self, stored_name: &str) -> StorageResult<()>;

    /// Size in bytes of a stored file.
    async fn content_length(&self, stored_name: &str) -> StorageResult<u64>;
}
