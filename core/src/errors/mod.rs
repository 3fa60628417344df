//! Error types for key lifecycle and token issuance.

pub mod types;

pub use types::{DomainError, ErrorResponse, KeyError, TokenError};
