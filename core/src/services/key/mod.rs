//! Key lifecycle services
//!
//! This module covers everything between a fresh RSA key pair and a stored
//! row:
//! - Key pair generation with fixed parameters
//! - The material codec: PKCS#8 DER for storage, JWK for publication
//! - Startup seeding of one valid and one already-expired key

pub mod codec;
pub mod generator;
pub mod seeder;

pub use codec::{decode_private_key, encode_private_key, public_key_to_jwk};
pub use generator::{generate_signing_key, RSA_KEY_SIZE_BITS};
pub use seeder::seed_startup_keys;
