//! Key repository trait defining the interface for signing key persistence.

use async_trait::async_trait;

use crate::domain::entities::key::SigningKey;
use crate::errors::DomainError;

/// Repository trait for SigningKey persistence operations
///
/// The store is append-only: rows are inserted with a store-assigned,
/// monotonically increasing `kid` and are never updated or deleted. Expired
/// rows stay selectable through the expired query indefinitely, which keeps
/// the deliberately-sign-with-an-expired-key path exercisable.
///
/// The boundary is a strict inequality: a row with `expires_at == now` is
/// expired, never valid.
#[async_trait]
pub trait KeyRepository: Send + Sync {
    /// Insert a new key row and return its assigned id
    ///
    /// # Arguments
    /// * `material` - PKCS#8 DER private key bytes
    /// * `expires_at` - Unix timestamp ending the validity window
    ///
    /// # Returns
    /// * `Ok(i64)` - The store-assigned kid
    /// * `Err(DomainError)` - Underlying storage unavailable
    async fn insert_key(&self, material: &[u8], expires_at: i64) -> Result<i64, DomainError>;

    /// Find one key matching the requested validity window
    ///
    /// With `expired == false`, returns some row with `expires_at > now`;
    /// with `expired == true`, some row with `expires_at <= now`. When
    /// several rows match, which one is returned is unspecified - callers
    /// must not depend on a particular choice.
    ///
    /// # Returns
    /// * `Ok(Some(SigningKey))` - A matching row
    /// * `Ok(None)` - No row matches the window
    /// * `Err(DomainError)` - Underlying storage unavailable
    async fn find_signing_key(
        &self,
        now: i64,
        expired: bool,
    ) -> Result<Option<SigningKey>, DomainError>;

    /// Find all keys still valid at `now`, in insertion (kid) order
    ///
    /// # Returns
    /// * `Ok(Vec<SigningKey>)` - Possibly empty list of valid rows
    /// * `Err(DomainError)` - Underlying storage unavailable
    async fn find_valid_keys(&self, now: i64) -> Result<Vec<SigningKey>, DomainError>;
}
