//! Content-type detection
//!
//! The validator never trusts the declared filename or a client-supplied
//! header; content type is determined from the file's own bytes.

use std::path::Path;

use async_trait::async_trait;
use imgdrop_core::AppError;
use tokio::io::AsyncReadExt;

/// Leading bytes read for signature matching. Generous for every
/// signature in the `infer` registry.
const SNIFF_LEN: u64 = 8192;

/// Capability for determining a file's MIME type from its content.
#[async_trait]
pub trait ContentTypeDetector: Send + Sync {
    /// Sniff the MIME type of the file at `path`.
    ///
    /// Returns `Ok(None)` when the content matches no known signature.
    async fn detect(&self, path: &Path) -> Result<Option<String>, AppError>;
}

/// Detector backed by the `infer` magic-number registry.
pub struct MagicByteDetector;

#[async_trait]
impl ContentTypeDetector for MagicByteDetector {
    async fn detect(&self, path: &Path) -> Result<Option<String>, AppError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            AppError::InvalidInput(format!(
                "Cannot open uploaded file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        let mut limited = file.take(SNIFF_LEN);
        limited.read_to_end(&mut head).await.map_err(|e| {
            AppError::InvalidInput(format!(
                "Cannot read uploaded file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(infer::get(&head).map(|kind| kind.mime_type().to_string()))
    }
}
