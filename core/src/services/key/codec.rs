//! Key material codec
//!
//! Two independent conversions: private key <-> PKCS#8 DER bytes for
//! storage, and public key -> JWK for publication. The storage encoding
//! round-trips bit-for-bit; the JWK projection is one-way and carries no
//! private material.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::domain::entities::key::{Jwk, JWK_ALGORITHM, JWK_KEY_TYPE, JWK_USE};
use crate::errors::KeyError;

/// Serializes a private key to unencrypted PKCS#8 DER for storage
pub fn encode_private_key(key: &RsaPrivateKey) -> Result<Vec<u8>, KeyError> {
    key.to_pkcs8_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|err| {
            tracing::error!(error = %err, "Failed to encode private key as PKCS#8 DER");
            KeyError::EncodeError
        })
}

/// Reconstructs a private key from its stored PKCS#8 DER bytes
///
/// Exact inverse of [`encode_private_key`]. Fails with
/// [`KeyError::DecodeError`] when the bytes are not a valid encoded key
/// (e.g. a corrupted storage row); callers treat that as "no usable key".
pub fn decode_private_key(der: &[u8]) -> Result<RsaPrivateKey, KeyError> {
    RsaPrivateKey::from_pkcs8_der(der).map_err(|_| KeyError::DecodeError)
}

/// Projects a public key into its JWK representation
///
/// Modulus and exponent are rendered as big-endian unsigned integers using
/// the minimum number of bytes, then base64url-encoded without padding.
pub fn public_key_to_jwk(key: &RsaPublicKey, kid: i64) -> Jwk {
    Jwk {
        kid: kid.to_string(),
        kty: JWK_KEY_TYPE.to_string(),
        alg: JWK_ALGORITHM.to_string(),
        usage: JWK_USE.to_string(),
        n: URL_SAFE_NO_PAD.encode(key.n().to_bytes_be()),
        e: URL_SAFE_NO_PAD.encode(key.e().to_bytes_be()),
    }
}
