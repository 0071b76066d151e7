//! Upload validation and persistence
//!
//! One pipeline per submission: directory bootstrap -> transport check ->
//! content sniffing -> size ceiling -> name generation -> atomic move.
//! Checks short-circuit on the first failure and nothing is written before
//! every check has passed.

use std::sync::Arc;
use std::time::Instant;

use imgdrop_core::models::{UploadResult, UploadSubmission};
use imgdrop_core::AppError;
use imgdrop_storage::Storage;

use crate::detector::ContentTypeDetector;
use crate::naming::{declared_extension, extension_for_mime, generate_stored_name};
use crate::policy::UploadPolicy;

/// Fixed transport-failure message. The boundary shows it verbatim, so the
/// wording is part of the contract.
const MSG_TRANSPORT: &str = "No file uploaded or there was an upload error.";
const MSG_MOVE_FAILED: &str = "Failed to move uploaded file.";

/// Validates one file submission and persists it under a unique name.
///
/// The storage handle (which owns the target directory), the content-type
/// detector, and the acceptance policy are injected at construction.
/// Rejections are reported through `UploadResult`; only a failure to
/// bootstrap the upload directory escapes as `Err`.
pub struct UploadValidator {
    storage: Arc<dyn Storage>,
    detector: Arc<dyn ContentTypeDetector>,
    policy: UploadPolicy,
}

impl UploadValidator {
    pub fn new(
        storage: Arc<dyn Storage>,
        detector: Arc<dyn ContentTypeDetector>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            storage,
            detector,
            policy,
        }
    }

    /// Run the ordered acceptance checks and, on success, move the
    /// temporary file into the upload directory.
    #[tracing::instrument(
        skip(self, submission),
        fields(
            original_filename = %submission.original_filename,
            size_bytes = submission.size_bytes,
        )
    )]
    pub async fn validate_and_store(
        &self,
        submission: &UploadSubmission,
    ) -> Result<UploadResult, AppError> {
        let start = Instant::now();

        // Directory bootstrap failure is the one fatal condition.
        self.storage
            .ensure_root()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to prepare upload directory: {}", e)))?;

        if !submission.field_present || !submission.transport_code.is_ok() {
            tracing::debug!(
                code = ?submission.transport_code,
                "Rejected submission at transport check"
            );
            return Ok(UploadResult::rejected(MSG_TRANSPORT));
        }

        // Sniff the actual bytes; an unreadable or unrecognized file is a
        // rejection, not a crash.
        let detected = match self.detector.detect(&submission.temp_path).await {
            Ok(mime) => mime,
            Err(e) => {
                tracing::warn!(error = %e, "Content sniffing failed");
                None
            }
        };

        let allowed = detected
            .as_deref()
            .map(|mime| self.policy.allows(mime))
            .unwrap_or(false);
        if !allowed {
            tracing::debug!(detected = ?detected, "Rejected submission by content type");
            return Ok(UploadResult::rejected(format!(
                "Invalid file type. Allowed types: {}.",
                self.policy.allowed_content_types.join(", ")
            )));
        }

        if submission.size_bytes > self.policy.max_file_size {
            tracing::debug!(
                size_bytes = submission.size_bytes,
                max_file_size = self.policy.max_file_size,
                "Rejected submission by size"
            );
            return Ok(UploadResult::rejected(format!(
                "File size exceeds the maximum limit of {} MB.",
                self.policy.max_file_size / 1024 / 1024
            )));
        }

        let extension = declared_extension(&submission.original_filename)
            .or_else(|| {
                detected
                    .as_deref()
                    .and_then(extension_for_mime)
                    .map(str::to_string)
            })
            // the type is allow-listed but outside the canonical map
            .unwrap_or_else(|| "bin".to_string());

        let stored_name = generate_stored_name(&self.policy.name_prefix, &extension);

        match self.storage.adopt(&submission.temp_path, &stored_name).await {
            Ok(path) => {
                tracing::info!(
                    stored_name = %stored_name,
                    path = %path.display(),
                    size_bytes = submission.size_bytes,
                    content_type = %detected.as_deref().unwrap_or("unknown"),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Upload stored"
                );
                let message = format!("File uploaded successfully: {}", stored_name);
                Ok(UploadResult::stored(stored_name, message))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    stored_name = %stored_name,
                    "Failed to persist upload"
                );
                Ok(UploadResult::rejected(MSG_MOVE_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use imgdrop_core::models::TransportCode;
    use imgdrop_storage::LocalStorage;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;
    use tokio::fs;

    /// Detector stub returning a fixed type and counting invocations.
    struct FixedDetector {
        mime: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedDetector {
        fn new(mime: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                mime,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ContentTypeDetector for FixedDetector {
        async fn detect(&self, _path: &Path) -> Result<Option<String>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.mime.map(str::to_string))
        }
    }

    fn validator(
        root: &Path,
        detector: Arc<FixedDetector>,
    ) -> UploadValidator {
        UploadValidator::new(
            Arc::new(LocalStorage::new(root)),
            detector,
            UploadPolicy::default(),
        )
    }

    #[tokio::test]
    async fn transport_error_short_circuits_before_sniffing() {
        let base = tempdir().unwrap();
        let detector = FixedDetector::new(Some("image/png"));
        let validator = validator(&base.path().join("uploads"), detector.clone());

        let mut submission = UploadSubmission::new("/nonexistent/tmp", "photo.png", 100);
        submission.transport_code = TransportCode::Partial;

        let result = validator.validate_and_store(&submission).await.unwrap();

        assert!(!result.accepted);
        assert_eq!(result.message, "No file uploaded or there was an upload error.");
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_field_uses_the_fixed_transport_message() {
        let base = tempdir().unwrap();
        let detector = FixedDetector::new(Some("image/png"));
        let validator = validator(&base.path().join("uploads"), detector);

        let mut submission = UploadSubmission::new("/nonexistent/tmp", "photo.png", 100);
        submission.field_present = false;

        let result = validator.validate_and_store(&submission).await.unwrap();

        assert!(!result.accepted);
        assert_eq!(result.message, "No file uploaded or there was an upload error.");
    }

    #[tokio::test]
    async fn size_ceiling_applies_even_to_valid_types() {
        let spool = tempdir().unwrap();
        let base = tempdir().unwrap();
        let temp = spool.path().join("big");
        fs::write(&temp, b"small actual content").await.unwrap();

        let detector = FixedDetector::new(Some("image/jpeg"));
        let validator = validator(&base.path().join("uploads"), detector);

        let submission = UploadSubmission::new(&temp, "big.jpg", 3 * 1024 * 1024);
        let result = validator.validate_and_store(&submission).await.unwrap();

        assert!(!result.accepted);
        assert!(result.message.contains("maximum limit of 2 MB"));
        assert!(fs::try_exists(&temp).await.unwrap(), "no side effects on rejection");
    }

    #[tokio::test]
    async fn missing_extension_falls_back_to_detected_type() {
        let spool = tempdir().unwrap();
        let base = tempdir().unwrap();
        let temp = spool.path().join("incoming");
        fs::write(&temp, b"pretend png").await.unwrap();

        let detector = FixedDetector::new(Some("image/png"));
        let validator = validator(&base.path().join("uploads"), detector);

        let submission = UploadSubmission::new(&temp, "bare-name", 11);
        let result = validator.validate_and_store(&submission).await.unwrap();

        assert!(result.accepted);
        assert!(result.stored_name.unwrap().ends_with(".png"));
    }

    #[tokio::test]
    async fn move_failure_is_reported_not_propagated() {
        let base = tempdir().unwrap();
        let detector = FixedDetector::new(Some("image/png"));
        let validator = validator(&base.path().join("uploads"), detector);

        // Temp file vanished between sniffing and the move.
        let submission = UploadSubmission::new("/nonexistent/tmp", "photo.png", 10);
        let result = validator.validate_and_store(&submission).await.unwrap();

        assert!(!result.accepted);
        assert_eq!(result.message, "Failed to move uploaded file.");
    }
}
