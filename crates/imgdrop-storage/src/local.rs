use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use tokio::fs;

use crate::traits::{Storage, StorageError, StorageResult};

/// Permission bits applied when the upload directory is first created:
/// read and execute for everyone, write for the owner.
#[cfg(unix)]
const UPLOAD_DIR_MODE: u32 = 0o755;

/// Local filesystem storage implementation
///
/// Owns one upload directory. The directory is created lazily by
/// `ensure_root`, so construction never touches the filesystem.
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStorage { root: root.into() }
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Convert a stored name to a filesystem path.
    ///
    /// Stored names must be bare filenames; anything carrying a directory
    /// component or traversal sequence is rejected here, before any
    /// filesystem access.
    fn name_to_path(&self, stored_name: &str) -> StorageResult<PathBuf> {
        if stored_name.is_empty()
            || stored_name.contains('/')
            || stored_name.contains('\\')
            || stored_name.contains("..")
        {
            return Err(StorageError::InvalidName(stored_name.to_string()));
        }

        Ok(self.root.join(stored_name))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn ensure_root(&self) -> StorageResult<()> {
        if fs::try_exists(&self.root).await.unwrap_or(false) {
            return Ok(());
        }

        fs::create_dir_all(&self.root).await.map_err(|e| {
            StorageError::DirectoryCreation(format!(
                "Failed to create upload directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        // create_dir_all honors the umask; apply the fixed bits explicitly.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.root, std::fs::Permissions::from_mode(UPLOAD_DIR_MODE))
                .await
                .map_err(|e| {
                    StorageError::DirectoryCreation(format!(
                        "Failed to set permissions on {}: {}",
                        self.root.display(),
                        e
                    ))
                })?;
        }

        tracing::info!(path = %self.root.display(), "Created upload directory");
        Ok(())
    }

    async fn adopt(&self, temp_path: &Path, stored_name: &str) -> StorageResult<PathBuf> {
        let dest = self.name_to_path(stored_name)?;
        let start = Instant::now();

        match fs::rename(temp_path, &dest).await {
            Ok(()) => {}
            Err(rename_err) => {
                // rename cannot cross filesystems; retry as copy + unlink
                fs::copy(temp_path, &dest).await.map_err(|copy_err| {
                    StorageError::PersistFailed(format!(
                        "Failed to move {} to {}: {} (rename: {})",
                        temp_path.display(),
                        dest.display(),
                        copy_err,
                        rename_err
                    ))
                })?;

                if let Err(e) = fs::remove_file(temp_path).await {
                    tracing::warn!(
                        path = %temp_path.display(),
                        error = %e,
                        "Failed to remove temporary file after copy"
                    );
                }
            }
        }

        tracing::info!(
            path = %dest.display(),
            name = %stored_name,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Adopted uploaded file"
        );

        Ok(dest)
    }

    async fn exists(&self, stored_name: &str) -> StorageResult<bool> {
        let path = self.name_to_path(stored_name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn read(&self, stored_name: &str) -> StorageResult<Vec<u8>> {
        let path = self.name_to_path(stored_name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(stored_name.to_string()));
        }

        Ok(fs::read(&path).await?)
    }

    async fn delete(&self, stored_name: &str) -> StorageResult<()> {
        let path = self.name_to_path(stored_name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), name = %stored_name, "Deleted stored file");
        Ok(())
    }

    async fn content_length(&self, stored_name: &str) -> StorageResult<u64> {
        let path = self.name_to_path(stored_name)?;
        let meta = fs::metadata(&path).await?;
        Ok(meta.len())
    }
}
