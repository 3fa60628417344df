//! Business services containing the key lifecycle and issuance logic.

pub mod jwks;
pub mod key;
pub mod token;

// Re-export commonly used types
pub use jwks::JwksService;
pub use key::{
    decode_private_key, encode_private_key, generate_signing_key, public_key_to_jwk,
    seed_startup_keys,
};
pub use token::{TokenConfig, TokenService};
