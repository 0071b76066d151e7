//! Data models for the application
//!
//! Organized by domain: the upload submission/result pair consumed and
//! produced by the validator, and the rows returned by the retrieval
//! repositories.

mod post;
mod upload;
mod user;

// Re-export all models for convenient imports
pub use post::Post;
pub use upload::{TransportCode, UploadResult, UploadSubmission};
pub use user::User;
