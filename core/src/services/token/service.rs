//! Main token service implementation

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rsa::pkcs1::EncodeRsaPrivateKey;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::repositories::KeyRepository;
use crate::services::key::codec::decode_private_key;

use super::config::TokenConfig;

/// Service issuing RS256-signed JWTs from stored signing keys
pub struct TokenService<R: KeyRepository> {
    repository: R,
    config: TokenConfig,
}

impl<R: KeyRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: R, config: TokenConfig) -> Self {
        Self { repository, config }
    }

    /// Issues a signed token using a key from the requested validity window
    ///
    /// With `use_expired == false` the token is signed with some key still
    /// valid at `now`; with `use_expired == true`, with some key whose
    /// window has already closed (a deliberate test/demo path). Which key is
    /// used among several matches is unspecified; its id is embedded as the
    /// `kid` header so verifiers can find the matching verification key.
    ///
    /// Read-only: issuing a token never mutates the key store.
    ///
    /// # Returns
    /// * `Ok(String)` - Compact JWT (header.payload.signature)
    /// * `Err(TokenError::NoKeyAvailable)` - No key matches the window
    /// * `Err(TokenError::SigningFailed)` - Stored material unusable or
    ///   signature construction failed
    pub async fn issue_token(&self, now: i64, use_expired: bool) -> Result<String, DomainError> {
        let key = self
            .repository
            .find_signing_key(now, use_expired)
            .await?
            .ok_or(TokenError::NoKeyAvailable)?;

        let private_key = decode_private_key(&key.material).map_err(|err| {
            tracing::error!(kid = key.kid, error = %err, "Selected key material is unusable");
            TokenError::SigningFailed
        })?;

        // jsonwebtoken expects PKCS#1 DER for RSA encoding keys
        let pkcs1_der = private_key
            .to_pkcs1_der()
            .map_err(|_| TokenError::SigningFailed)?;
        let encoding_key = EncodingKey::from_rsa_der(pkcs1_der.as_bytes());

        let claims = Claims::new(
            self.config.subject.clone(),
            now,
            self.config.token_lifetime_secs,
        );

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(key.kid.to_string());

        let token = encode(&header, &claims, &encoding_key).map_err(|err| {
            tracing::error!(kid = key.kid, error = %err, "JWT signing failed");
            TokenError::SigningFailed
        })?;

        tracing::debug!(kid = key.kid, use_expired, "Issued token");
        Ok(token)
    }
}
