//! # Infrastructure Layer
//!
//! Concrete implementations of the Keyserve core interfaces: the SQLite key
//! store behind [`ks_core::KeyRepository`] and the connection-pool plumbing
//! around it.

pub mod config;
pub mod database;

pub use config::DatabaseConfig;
pub use database::{DatabasePool, SqliteKeyRepository};

use thiserror::Error;

/// Infrastructure-level errors
///
/// Failures below the domain boundary: pool construction, schema creation,
/// connectivity. Repository query errors surface as
/// [`ks_core::DomainError::Database`] instead, since they cross the core's
/// contract.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
