//! SQLite implementation of the KeyRepository trait.
//!
//! Concrete persistence for signing keys using SQLx over the append-only
//! `keys` table. Rows are only ever inserted; kid assignment comes from the
//! autoincrement primary key, so identifiers are monotonic and never reused
//! even across process restarts.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use ks_core::domain::entities::key::SigningKey;
use ks_core::errors::DomainError;
use ks_core::repositories::KeyRepository;

/// SQLite implementation of KeyRepository
#[derive(Clone)]
pub struct SqliteKeyRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteKeyRepository {
    /// Create a new SQLite key repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a SigningKey entity
    fn row_to_key(row: &sqlx::sqlite::SqliteRow) -> Result<SigningKey, DomainError> {
        let kid: i64 = row.try_get("kid").map_err(|e| DomainError::Database {
            message: format!("Failed to get kid: {}", e),
        })?;
        let material: Vec<u8> = row.try_get("key").map_err(|e| DomainError::Database {
            message: format!("Failed to get key material: {}", e),
        })?;
        let expires_at: i64 = row.try_get("exp").map_err(|e| DomainError::Database {
            message: format!("Failed to get exp: {}", e),
        })?;

        Ok(SigningKey::new(kid, material, expires_at))
    }
}

#[async_trait]
impl KeyRepository for SqliteKeyRepository {
    async fn insert_key(&self, material: &[u8], expires_at: i64) -> Result<i64, DomainError> {
        let result = sqlx::query("INSERT INTO keys (key, exp) VALUES (?, ?)")
            .bind(material)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to insert key: {}", e),
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn find_signing_key(
        &self,
        now: i64,
        expired: bool,
    ) -> Result<Option<SigningKey>, DomainError> {
        // Which row wins among several matches is unspecified; no ORDER BY
        // on purpose.
        let query = if expired {
            "SELECT kid, key, exp FROM keys WHERE exp <= ? LIMIT 1"
        } else {
            "SELECT kid, key, exp FROM keys WHERE exp > ? LIMIT 1"
        };

        let result = sqlx::query(query)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find signing key: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_key(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_valid_keys(&self, now: i64) -> Result<Vec<SigningKey>, DomainError> {
        let rows = sqlx::query("SELECT kid, key, exp FROM keys WHERE exp > ? ORDER BY kid")
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list valid keys: {}", e),
            })?;

        rows.iter().map(Self::row_to_key).collect()
    }
}
