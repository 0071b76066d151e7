//! Imgdrop DB Library
//!
//! Parameterized retrieval over an explicitly constructed Postgres pool.
//! Every query binds its values; nothing is interpolated into SQL text.
//! The pool is created once by `connect_pool` and injected into the
//! repositories; there is no implicit global connection handle.

pub mod pool;
pub mod posts;
pub mod users;

// Re-export commonly used types
pub use pool::connect_pool;
pub use posts::PostRepository;
pub use users::UserRepository;
