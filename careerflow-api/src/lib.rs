//! # CareerFlow API Server Library
//!
//! HTTP surface of CareerFlow: authentication, profile records and ATS
//! resume exports for the signed-in user.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration from the environment
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Response security headers
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
