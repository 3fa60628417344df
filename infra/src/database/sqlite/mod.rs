//! SQLite repository implementations

pub mod key_repository_impl;

pub use key_repository_impl::SqliteKeyRepository;
