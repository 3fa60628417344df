//! # Keyserve Core
//!
//! Core domain layer for the Keyserve token issuer. This crate contains the
//! signing-key entities, the key repository interface, the key lifecycle
//! services (generation, codec, seeding), the RS256 token issuer, and the
//! JWKS publisher, plus the error types shared across the workspace.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::key::{Jwk, Jwks, SigningKey};
pub use domain::entities::token::Claims;
pub use errors::{DomainError, ErrorResponse, KeyError, TokenError};
pub use repositories::KeyRepository;
pub use services::{
    decode_private_key, encode_private_key, generate_signing_key, public_key_to_jwk,
    seed_startup_keys, JwksService, TokenConfig, TokenService,
};
