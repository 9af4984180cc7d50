//! Bearer-token authentication middleware.
//!
//! Every API route sits behind a single shared secret configured at
//! process start. A missing Authorization header is 401; a present but
//! wrong credential is 403.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Middleware state: the configured API token.
pub type AuthState = Arc<String>;

pub async fn auth_middleware(
    State(token): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match header {
        None => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Unauthorized",
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response(),
        Some(value) if bearer_matches(value, &token) => next.run(request).await,
        Some(_) => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({
                "error": "Forbidden",
                "code": "INVALID_TOKEN"
            })),
        )
            .into_response(),
    }
}

fn bearer_matches(header_value: &str, token: &str) -> bool {
    header_value.strip_prefix("Bearer ") == Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_bearer_token() {
        assert!(bearer_matches("Bearer secret-token", "secret-token"));
    }

    #[test]
    fn rejects_wrong_token() {
        assert!(!bearer_matches("Bearer other-token", "secret-token"));
    }

    #[test]
    fn rejects_missing_bearer_prefix() {
        assert!(!bearer_matches("secret-token", "secret-token"));
        assert!(!bearer_matches("Basic dXNlcjpwYXNz", "secret-token"));
    }

    #[test]
    fn rejects_token_with_extra_suffix() {
        assert!(!bearer_matches("Bearer secret-token-and-more", "secret-token"));
    }
}
