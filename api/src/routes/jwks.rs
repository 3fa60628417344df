//! JWKS publication endpoint.

use actix_web::{web, HttpResponse};
use chrono::Utc;

use ks_core::repositories::KeyRepository;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /.well-known/jwks.json
///
/// Publishes the verification keys for all currently valid signing keys.
/// An empty key set is a normal 200 response with zero entries; the only
/// error is an unreachable key store (503).
pub async fn jwks<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    let now = Utc::now().timestamp();

    match state.jwks_service.publish(now).await {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(error) => handle_domain_error(&error),
    }
}
