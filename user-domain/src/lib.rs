//! User domain model, validators and the password service.
//!
//! This crate is independent of the HTTP service and the user repository;
//! both can consume it without pulling in each other.

pub mod error;
pub mod password;
pub mod user;

pub use error::DomainError;
pub use password::PasswordService;
pub use user::User;
