//! Token issuance endpoint.

use actix_web::{web, HttpResponse};
use chrono::Utc;

use ks_core::repositories::KeyRepository;

use crate::app::AppState;
use crate::dto::{AuthQuery, TokenResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /auth
///
/// Issues an RS256-signed JWT. With `?expired=true` the token is
/// deliberately signed with an already-expired key (test/demo path).
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 404 Not Found: no key matches the requested validity window
/// - 500 Internal Server Error: stored key unusable or signing failed
/// - 503 Service Unavailable: key store unreachable
pub async fn auth<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<AuthQuery>,
) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    let now = Utc::now().timestamp();

    match state.token_service.issue_token(now, query.expired).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(&error),
    }
}
