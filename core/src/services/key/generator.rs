//! RSA key pair generation with fixed parameters.

use rsa::RsaPrivateKey;

use crate::errors::KeyError;

/// Modulus size for all generated signing keys
pub const RSA_KEY_SIZE_BITS: usize = 2048;

/// Generates a fresh RSA signing key pair
///
/// Fixed 2048-bit modulus; the `rsa` crate uses the standard public exponent
/// 65537. Generation only fails on an entropy or platform fault, which
/// callers at startup treat as fatal.
pub fn generate_signing_key() -> Result<RsaPrivateKey, KeyError> {
    let mut rng = rand::thread_rng();
    RsaPrivateKey::new(&mut rng, RSA_KEY_SIZE_BITS).map_err(|err| {
        tracing::error!(error = %err, "RSA key generation failed");
        KeyError::GenerationFailed
    })
}
