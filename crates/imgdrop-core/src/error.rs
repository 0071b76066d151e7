//! Error types module
//!
//! Domain errors shared across the imgdrop crates. Note that rejecting an
//! upload is not an error: the validator reports rejections through
//! `UploadResult`. `AppError` covers the conditions that abort an
//! operation outright.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
