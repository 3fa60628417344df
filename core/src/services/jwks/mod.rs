//! JWKS publication module
//!
//! Renders all currently valid signing keys as a JWKS document for
//! verifiers. The set is computed from the store on every call and never
//! cached.

mod service;

pub use service::JwksService;
