//! In-memory message board API: message CRUD, HTTP status lookup with an
//! upstream image proxy, and a health endpoint.

pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
