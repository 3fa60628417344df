//! Mock implementation of KeyRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::key::SigningKey;
use crate::errors::DomainError;

use super::r#trait::KeyRepository;

/// In-memory key repository for service tests
///
/// Assigns kids monotonically starting at 1, mirroring the autoincrement
/// column in the real store. Clones share the same underlying rows.
#[derive(Clone)]
pub struct MockKeyRepository {
    keys: Arc<RwLock<Vec<SigningKey>>>,
    fail_storage: bool,
}

impl MockKeyRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            keys: Arc::new(RwLock::new(Vec::new())),
            fail_storage: false,
        }
    }

    /// Create a mock whose every operation reports storage unavailability
    pub fn unavailable() -> Self {
        Self {
            keys: Arc::new(RwLock::new(Vec::new())),
            fail_storage: true,
        }
    }

    /// Overwrite the stored material of an existing row, keeping its kid
    ///
    /// Lets tests simulate a corrupted storage row.
    pub async fn corrupt_key(&self, kid: i64, material: Vec<u8>) {
        let mut keys = self.keys.write().await;
        if let Some(key) = keys.iter_mut().find(|k| k.kid == kid) {
            key.material = material;
        }
    }

    fn storage_error() -> DomainError {
        DomainError::Database {
            message: "storage unavailable".to_string(),
        }
    }
}

impl Default for MockKeyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyRepository for MockKeyRepository {
    async fn insert_key(&self, material: &[u8], expires_at: i64) -> Result<i64, DomainError> {
        if self.fail_storage {
            return Err(Self::storage_error());
        }

        let mut keys = self.keys.write().await;
        let kid = keys.last().map_or(1, |k| k.kid + 1);
        keys.push(SigningKey::new(kid, material.to_vec(), expires_at));
        Ok(kid)
    }

    async fn find_signing_key(
        &self,
        now: i64,
        expired: bool,
    ) -> Result<Option<SigningKey>, DomainError> {
        if self.fail_storage {
            return Err(Self::storage_error());
        }

        let keys = self.keys.read().await;
        Ok(keys
            .iter()
            .find(|k| {
                if expired {
                    k.expires_at <= now
                } else {
                    k.expires_at > now
                }
            })
            .cloned())
    }

    async fn find_valid_keys(&self, now: i64) -> Result<Vec<SigningKey>, DomainError> {
        if self.fail_storage {
            return Err(Self::storage_error());
        }

        let keys = self.keys.read().await;
        Ok(keys.iter().filter(|k| k.expires_at > now).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn kids_are_monotonic_and_never_reused() {
        let repo = MockKeyRepository::new();
        let first = repo.insert_key(&[1], 100).await.unwrap();
        let second = repo.insert_key(&[2], 200).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn boundary_row_counts_as_expired() {
        let repo = MockKeyRepository::new();
        let kid = repo.insert_key(&[1], 1_000).await.unwrap();

        assert!(repo.find_signing_key(1_000, false).await.unwrap().is_none());
        let expired = repo.find_signing_key(1_000, true).await.unwrap().unwrap();
        assert_eq!(expired.kid, kid);
    }

    #[tokio::test]
    async fn valid_keys_keep_insertion_order() {
        let repo = MockKeyRepository::new();
        let a = repo.insert_key(&[1], 500).await.unwrap();
        repo.insert_key(&[2], 10).await.unwrap();
        let c = repo.insert_key(&[3], 600).await.unwrap();

        let valid = repo.find_valid_keys(100).await.unwrap();
        let kids: Vec<i64> = valid.iter().map(|k| k.kid).collect();
        assert_eq!(kids, vec![a, c]);
    }

    #[tokio::test]
    async fn unavailable_storage_surfaces_database_error() {
        let repo = MockKeyRepository::unavailable();
        let err = repo.insert_key(&[1], 100).await.unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
