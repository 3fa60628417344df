//! Domain entities for signing keys and issued tokens.

pub mod key;
pub mod token;

pub use key::{Jwk, Jwks, SigningKey};
pub use token::Claims;
