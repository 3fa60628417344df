//! Configuration for the token service

use crate::domain::entities::token::{TOKEN_LIFETIME_SECS, TOKEN_SUBJECT};

/// Configuration for the token service
///
/// The signing algorithm is fixed to RS256; only the claim contents are
/// configurable.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Subject claim placed in every issued token
    pub subject: String,
    /// Token lifetime in seconds (`exp = iat + lifetime`)
    pub token_lifetime_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            subject: TOKEN_SUBJECT.to_string(),
            token_lifetime_secs: TOKEN_LIFETIME_SECS,
        }
    }
}

impl TokenConfig {
    /// Creates config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            subject: std::env::var("JWT_SUBJECT").unwrap_or_else(|_| TOKEN_SUBJECT.to_string()),
            token_lifetime_secs: std::env::var("JWT_TOKEN_LIFETIME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(TOKEN_LIFETIME_SECS),
        }
    }
}
