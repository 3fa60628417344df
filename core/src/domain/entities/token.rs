//! Token entities for JWT issuance.

use serde::{Deserialize, Serialize};

/// Issued token lifetime in seconds
pub const TOKEN_LIFETIME_SECS: i64 = 500;

/// Fixed subject for issued tokens (no user model in scope)
pub const TOKEN_SUBJECT: &str = "test_user";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a token issued at `now` with the given lifetime
    pub fn new(subject: impl Into<String>, now: i64, lifetime_secs: i64) -> Self {
        Self {
            sub: subject.into(),
            iat: now,
            exp: now + lifetime_secs,
        }
    }
}
