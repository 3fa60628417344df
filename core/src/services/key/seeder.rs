//! Startup key seeding.

use crate::errors::DomainError;
use crate::repositories::KeyRepository;

use super::codec::encode_private_key;
use super::generator::generate_signing_key;

/// Lifetime of the valid startup key
pub const SEED_VALID_LIFETIME_SECS: i64 = 3600;

/// How far in the past the expired startup key ends its validity window
pub const SEED_EXPIRED_OFFSET_SECS: i64 = 100;

/// Generates and stores one valid and one already-expired signing key
///
/// Runs once at startup after schema creation so that both token paths
/// (current key, deliberately expired key) are exercisable immediately.
/// Generation or storage failure here is unrecoverable and propagated to
/// the caller, which aborts startup.
pub async fn seed_startup_keys<R: KeyRepository>(repo: &R, now: i64) -> Result<(), DomainError> {
    let valid = encode_private_key(&generate_signing_key()?)?;
    let valid_kid = repo.insert_key(&valid, now + SEED_VALID_LIFETIME_SECS).await?;

    let expired = encode_private_key(&generate_signing_key()?)?;
    let expired_kid = repo
        .insert_key(&expired, now - SEED_EXPIRED_OFFSET_SECS)
        .await?;

    tracing::info!(valid_kid, expired_kid, "Seeded startup signing keys");
    Ok(())
}
