//! # Keyserve API
//!
//! Thin HTTP adapter over the core token issuer and JWKS publisher. Route
//! handlers read the clock once, call into the core services, and map
//! structured domain errors to HTTP responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
