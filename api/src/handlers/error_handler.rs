//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;

use ks_core::errors::{DomainError, ErrorResponse, TokenError};

/// Converts a domain error into the matching HTTP response
///
/// Callers always receive a structured body with a stable error code,
/// never a partial or malformed token.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let body = ErrorResponse::from(error);

    match error {
        // Expected, user-triggerable: no key matches the requested window
        DomainError::Token(TokenError::NoKeyAvailable) => HttpResponse::NotFound().json(body),
        // Storage unavailable is a service-level outage
        DomainError::Database { .. } => HttpResponse::ServiceUnavailable().json(body),
        // Everything else is an internal failure of this request only
        DomainError::Token(TokenError::SigningFailed)
        | DomainError::Key(_)
        | DomainError::Internal { .. } => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use ks_core::errors::KeyError;

    #[test]
    fn no_key_available_is_not_found() {
        let response = handle_domain_error(&TokenError::NoKeyAvailable.into());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn signing_failed_is_internal_error() {
        let response = handle_domain_error(&TokenError::SigningFailed.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn decode_error_is_internal_error() {
        let response = handle_domain_error(&KeyError::DecodeError.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_error_is_service_unavailable() {
        let error = DomainError::Database {
            message: "pool closed".to_string(),
        };
        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
