//! Tests for token issuance against the mock key repository

use std::sync::OnceLock;

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use rsa::RsaPrivateKey;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{KeyRepository, MockKeyRepository};
use crate::services::key::{encode_private_key, generate_signing_key, public_key_to_jwk};
use crate::services::token::{TokenConfig, TokenService};

fn test_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| generate_signing_key().unwrap())
}

fn test_material() -> Vec<u8> {
    encode_private_key(test_key()).unwrap()
}

fn service(repo: MockKeyRepository) -> TokenService<MockKeyRepository> {
    TokenService::new(repo, TokenConfig::default())
}

#[tokio::test]
async fn issues_token_signed_with_a_valid_key() {
    let repo = MockKeyRepository::new();
    let now = 1_700_000_000;
    let kid = repo.insert_key(&test_material(), now + 3600).await.unwrap();

    let token = service(repo).issue_token(now, false).await.unwrap();

    let header = decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::RS256);
    assert_eq!(header.kid.as_deref(), Some(kid.to_string().as_str()));
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn issues_token_with_expired_key_on_request() {
    let repo = MockKeyRepository::new();
    let now = 1_700_000_000;
    repo.insert_key(&test_material(), now + 3600).await.unwrap();
    let expired_kid = repo.insert_key(&test_material(), now - 100).await.unwrap();

    let token = service(repo).issue_token(now, true).await.unwrap();

    let header = decode_header(&token).unwrap();
    assert_eq!(header.kid.as_deref(), Some(expired_kid.to_string().as_str()));
}

#[tokio::test]
async fn empty_store_reports_no_key_available() {
    let svc = service(MockKeyRepository::new());
    let err = svc.issue_token(1_700_000_000, false).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::NoKeyAvailable)
    ));
}

#[tokio::test]
async fn no_expired_rows_reports_no_key_available() {
    let repo = MockKeyRepository::new();
    let now = 1_700_000_000;
    repo.insert_key(&test_material(), now + 3600).await.unwrap();

    let err = service(repo).issue_token(now, true).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::NoKeyAvailable)
    ));
}

#[tokio::test]
async fn key_expiring_exactly_now_only_serves_expired_requests() {
    let repo = MockKeyRepository::new();
    let now = 1_700_000_000;
    let kid = repo.insert_key(&test_material(), now).await.unwrap();
    let svc = service(repo);

    let err = svc.issue_token(now, false).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::NoKeyAvailable)
    ));

    let token = svc.issue_token(now, true).await.unwrap();
    let header = decode_header(&token).unwrap();
    assert_eq!(header.kid.as_deref(), Some(kid.to_string().as_str()));
}

#[tokio::test]
async fn corrupt_material_reports_signing_failed() {
    let repo = MockKeyRepository::new();
    let now = 1_700_000_000;
    let kid = repo.insert_key(&test_material(), now + 3600).await.unwrap();
    repo.corrupt_key(kid, vec![0xba, 0xad]).await;

    let err = service(repo).issue_token(now, false).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::SigningFailed)));
}

#[tokio::test]
async fn storage_failure_propagates_as_database_error() {
    let svc = service(MockKeyRepository::unavailable());
    let err = svc.issue_token(1_700_000_000, false).await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn token_verifies_against_published_jwk() {
    let repo = MockKeyRepository::new();
    let now = chrono::Utc::now().timestamp();
    let kid = repo.insert_key(&test_material(), now + 3600).await.unwrap();

    let token = service(repo).issue_token(now, false).await.unwrap();

    let jwk = public_key_to_jwk(&test_key().to_public_key(), kid);
    let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e).unwrap();
    let data = decode::<Claims>(&token, &decoding_key, &Validation::new(Algorithm::RS256)).unwrap();

    assert_eq!(data.claims.sub, "test_user");
    assert_eq!(data.claims.iat, now);
    assert_eq!(data.claims.exp, now + 500);
}
