//! Database module - SQLite implementations using SQLx

pub mod connection;
pub mod sqlite;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use sqlite::SqliteKeyRepository;
