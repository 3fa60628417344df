//! Signing key entities and their JWK projections.

use serde::{Deserialize, Serialize};

/// Key type for all published verification keys
pub const JWK_KEY_TYPE: &str = "RSA";

/// Signing algorithm for all issued tokens and published keys
pub const JWK_ALGORITHM: &str = "RS256";

/// Public key usage tag
pub const JWK_USE: &str = "sig";

/// A persisted asymmetric signing key.
///
/// `material` holds the unencrypted PKCS#8 DER encoding of the private key;
/// the public half is always derivable from it. `kid` is assigned by the key
/// store on insert and never reused. `expires_at` is set once at insertion
/// and marks the validity boundary, not a deletion time - expired rows stay
/// in the store and remain selectable through the expired query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    /// Store-assigned key identifier
    pub kid: i64,

    /// PKCS#8 DER private key material
    pub material: Vec<u8>,

    /// Unix timestamp marking the end of the validity window
    pub expires_at: i64,
}

impl SigningKey {
    /// Creates a signing key row from its stored columns
    pub fn new(kid: i64, material: Vec<u8>, expires_at: i64) -> Self {
        Self {
            kid,
            material,
            expires_at,
        }
    }

    /// Checks whether the key is still valid at `now`
    ///
    /// A key whose `expires_at` equals `now` is already expired; the validity
    /// window is a strict inequality.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at > now
    }
}

/// Public verification key in JWK form.
///
/// Derived on every publish from a valid [`SigningKey`] row; never stored or
/// cached. Contains only public material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key identifier, the stringified store id
    pub kid: String,

    /// Key type, always "RSA"
    pub kty: String,

    /// Algorithm, always "RS256"
    pub alg: String,

    /// Usage tag, always "sig"
    #[serde(rename = "use")]
    pub usage: String,

    /// Modulus: minimal big-endian bytes, base64url without padding
    pub n: String,

    /// Public exponent: minimal big-endian bytes, base64url without padding
    pub e: String,
}

/// JWKS document listing the currently valid verification keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    /// Creates an empty key set
    pub fn empty() -> Self {
        Self { keys: Vec::new() }
    }
}
