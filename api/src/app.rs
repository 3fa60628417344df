//! Application state and factory
//!
//! Wires the core services to their routes. The state is generic over the
//! key repository so tests can run the full app against an in-memory
//! SQLite store.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ks_core::repositories::KeyRepository;
use ks_core::services::{JwksService, TokenService};

use crate::routes;

/// Shared application state holding the core services
pub struct AppState<R: KeyRepository> {
    pub token_service: TokenService<R>,
    pub jwks_service: JwksService<R>,
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: KeyRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Token issuance
        .route("/auth", web::post().to(routes::auth::auth::<R>))
        // Verification key publication
        .route(
            "/.well-known/jwks.json",
            web::get().to(routes::jwks::jwks::<R>),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "keyserve-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource does not exist",
    }))
}
