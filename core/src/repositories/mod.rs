//! Repository interfaces for persisted domain entities.

pub mod key;

pub use key::KeyRepository;

#[cfg(test)]
pub use key::MockKeyRepository;
