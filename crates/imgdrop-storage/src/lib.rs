//! Imgdrop Storage Library
//!
//! This crate provides the storage abstraction for validated uploads: the
//! `Storage` trait and the `LocalStorage` filesystem implementation that
//! owns an upload directory.
//!
//! # Stored name format
//!
//! Stored names are bare filenames (`img_{token}.{ext}`) with no directory
//! component. Names containing a path separator or `..` are rejected
//! before any filesystem access.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
