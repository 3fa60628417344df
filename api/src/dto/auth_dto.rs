//! DTOs for the token issuance endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for POST /auth
#[derive(Debug, Clone, Deserialize)]
pub struct AuthQuery {
    /// When true, deliberately sign with an already-expired key
    #[serde(default)]
    pub expired: bool,
}

/// Successful token issuance response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWT (header.payload.signature)
    pub token: String,
}
