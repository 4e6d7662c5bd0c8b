//! Accounts client
//!
//! This crate provides the shared wire types and error taxonomy for
//! talking to the remote accounts service.

pub mod api;
pub mod error;

// Re-export the common types at crate root for convenience
pub use api::{SignUpOptions, SignUpRequest, SignUpResponse};
pub use error::{AccountError, AccountErrorKind};
