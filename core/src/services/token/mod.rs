//! Token service module for RS256 JWT issuance
//!
//! This module selects a signing key from the key store by validity window,
//! reconstitutes it through the material codec, and signs a fixed claim set
//! with the key id embedded in the JWT header.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenConfig;
pub use service::TokenService;
