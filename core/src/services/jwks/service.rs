//! JWKS publisher implementation

use crate::domain::entities::key::Jwks;
use crate::errors::DomainError;
use crate::repositories::KeyRepository;
use crate::services::key::codec::{decode_private_key, public_key_to_jwk};

/// Service publishing the verification keys for all valid signing keys
pub struct JwksService<R: KeyRepository> {
    repository: R,
}

impl<R: KeyRepository> JwksService<R> {
    /// Creates a new JWKS service instance
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Renders the JWKS document for all keys valid at `now`
    ///
    /// Keys appear in insertion order. An empty store (or one with only
    /// expired keys) yields an empty, non-error set. A row whose material
    /// no longer decodes is logged and skipped; one corrupt row must not
    /// take down key exposure for everyone else. The only error path is
    /// storage unavailability.
    pub async fn publish(&self, now: i64) -> Result<Jwks, DomainError> {
        let rows = self.repository.find_valid_keys(now).await?;

        let mut keys = Vec::with_capacity(rows.len());
        for row in rows {
            match decode_private_key(&row.material) {
                Ok(private_key) => {
                    keys.push(public_key_to_jwk(&private_key.to_public_key(), row.kid));
                }
                Err(err) => {
                    tracing::warn!(
                        kid = row.kid,
                        error = %err,
                        "Skipping valid key with undecodable material"
                    );
                }
            }
        }

        tracing::debug!(count = keys.len(), "Published JWKS");
        Ok(Jwks { keys })
    }
}
