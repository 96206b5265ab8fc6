//! SQL-backed user repository with soft-delete semantics.
//!
//! Rows are never removed: `delete` stamps `deleted_at`, and every read
//! excludes stamped rows.

pub mod database;
pub mod error;
pub mod models;
pub mod repository;

pub use error::RepositoryError;
pub use models::{CreateUserRequest, UpdateUserRequest, User};
pub use repository::UserRepository;
