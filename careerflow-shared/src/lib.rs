//! # CareerFlow Shared Library
//!
//! Domain types, persistence and business logic behind the CareerFlow API.
//!
//! ## Module Organization
//!
//! - `models`: database models, profile enumerations and their queries
//! - `db`: connection pool and migrations
//! - `auth`: password hashing, JWT, middleware and ownership checks
//! - `resume`: profile aggregation and ATS export
//! - `dashboard`: statistics derived from the aggregated profile

pub mod auth;
pub mod dashboard;
pub mod db;
pub mod models;
pub mod resume;

/// Current version of the CareerFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
