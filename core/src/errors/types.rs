//! Domain-specific error types for key management and token issuance.
//!
//! Decode and signing failures are converted into these structured kinds at
//! the service boundary; they never propagate as panics past the core's
//! public contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key lifecycle errors
#[derive(Error, Debug)]
pub enum KeyError {
    /// Key pair generation failed; indicates an entropy or platform fault
    /// and is treated as fatal at startup.
    #[error("Key generation failed")]
    GenerationFailed,

    #[error("Key material encoding failed")]
    EncodeError,

    /// Stored material is not a valid PKCS#8 private key. Callers treat the
    /// row as unusable rather than crashing.
    #[error("Stored key material could not be decoded")]
    DecodeError,
}

/// Token issuance errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// No stored key matches the requested validity window. Expected and
    /// user-triggerable, not a crash.
    #[error("No signing key available for the requested validity window")]
    NoKeyAvailable,

    /// The selected key could not be decoded or the signature failed.
    #[error("Token signing failed")]
    SigningFailed,
}

/// Unified error type crossing the core's public contract
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Underlying storage is unavailable or misbehaving
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let error_code = match err {
            DomainError::Key(KeyError::GenerationFailed) => "KEY_GENERATION_FAILED",
            DomainError::Key(KeyError::EncodeError) => "KEY_ENCODE_FAILED",
            DomainError::Key(KeyError::DecodeError) => "KEY_DECODE_FAILED",
            DomainError::Token(TokenError::NoKeyAvailable) => "NO_KEY_AVAILABLE",
            DomainError::Token(TokenError::SigningFailed) => "TOKEN_SIGNING_FAILED",
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
