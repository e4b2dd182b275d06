//! Static bearer-token gate applied to every route.

use super::error::ApiError;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::warn;

/// The configured API token, shared by every request.
#[derive(Clone, Debug)]
pub struct ApiToken(Arc<SecretString>);

impl ApiToken {
    #[must_use]
    pub fn new(token: SecretString) -> Self {
        Self(Arc::new(token))
    }

    fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.expose_secret();
        !expected.is_empty() && expected == candidate
    }
}

/// Extract the credential from `Authorization: Bearer <token>`.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware: reject the request with 401 unless it carries the API token.
pub async fn require_bearer(
    State(token): State<ApiToken>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized =
        bearer_token(request.headers()).is_some_and(|candidate| token.matches(candidate));

    if authorized {
        Ok(next.run(request).await)
    } else {
        warn!("Unauthorized request to path: {}", request.uri().path());
        Err(ApiError::Unauthorized)
    }
}
