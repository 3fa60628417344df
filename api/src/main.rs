use actix_web::{web, HttpServer};
use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use ks_api::app::{create_app, AppState};
use ks_api::config::Config;
use ks_core::services::{seed_startup_keys, JwksService, TokenService};
use ks_infra::{DatabasePool, SqliteKeyRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Keyserve API server");

    let config = Config::from_env();

    // Database pool and idempotent schema creation
    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to create database pool")?;
    pool.init_schema()
        .await
        .context("Failed to initialize database schema")?;

    let repository = SqliteKeyRepository::new(pool.get_pool().clone());

    // Seed one valid and one expired signing key so both token paths work
    // immediately. Failure here is unrecoverable.
    seed_startup_keys(&repository, Utc::now().timestamp())
        .await
        .context("Failed to seed startup signing keys")?;

    let app_state = web::Data::new(AppState {
        token_service: TokenService::new(repository.clone(), config.token.clone()),
        jwks_service: JwksService::new(repository),
    });

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Binding HTTP server");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind to {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
