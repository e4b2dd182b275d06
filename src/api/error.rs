//! Request-boundary errors.
//!
//! Every failure a handler can produce maps to one variant here and renders
//! as a JSON body with the matching status. Store errors are logged and
//! replaced with a generic message so internals never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "Bookmark doesn't exist";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Build the 400 for an absent required field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing '{field}' in request body"))
    }

    /// Build the 400 for a present field whose value cannot be stored.
    #[must_use]
    pub fn invalid_field(field: &str) -> Self {
        Self::Validation(format!("Invalid '{field}' in request body"))
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            // The auth gate answers with a bare string, unlike the resource errors.
            Self::Unauthorized => json!({ "error": UNAUTHORIZED_MESSAGE }),
            Self::Internal(err) => {
                error!("Request failed: {err:#}");
                json!({ "error": { "message": "server error" } })
            }
            _ => json!({ "error": { "message": self.to_string() } }),
        };

        (status, Json(body)).into_response()
    }
}
