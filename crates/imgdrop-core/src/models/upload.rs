use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Transport-level result code attached to a submission by the receiving
/// boundary (e.g. a multipart HTTP layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportCode {
    Ok,
    NoFile,
    SizeExceeded,
    Partial,
    NoTempDir,
    WriteFailed,
}

impl TransportCode {
    pub fn is_ok(self) -> bool {
        matches!(self, TransportCode::Ok)
    }
}

/// One incoming file submission, populated by the calling boundary for the
/// duration of a single request. Read-only to the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSubmission {
    pub field_present: bool,
    pub transport_code: TransportCode,
    /// Where the boundary spooled the file before validation.
    pub temp_path: PathBuf,
    /// Filename as declared by the client. Never trusted for content-type
    /// decisions; only its extension feeds the stored-name generator.
    pub original_filename: String,
    /// Size as declared by the boundary.
    pub size_bytes: u64,
}

impl UploadSubmission {
    /// A well-formed submission with the transport reporting success.
    pub fn new(
        temp_path: impl Into<PathBuf>,
        original_filename: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            field_present: true,
            transport_code: TransportCode::Ok,
            temp_path: temp_path.into(),
            original_filename: original_filename.into(),
            size_bytes,
        }
    }
}

/// Outcome of one validate-and-store call. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_name: Option<String>,
    pub message: String,
}

impl UploadResult {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            stored_name: None,
            message: message.into(),
        }
    }

    pub fn stored(stored_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            stored_name: Some(stored_name.into()),
            message: message.into(),
        }
    }
}
