//! `/bookmarks` resource.
//!
//! Flow Overview:
//! 1) The bearer gate has already run by the time a handler is reached.
//! 2) Create validates required fields before touching the store.
//! 3) Each handler issues exactly one store call.
//! 4) Every record leaving the handler passes through [`Bookmark::sanitized`].

use super::SharedStore;
use crate::{
    api::error::ApiError,
    store::{Bookmark, NewBookmark},
};
use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// `rating` arrives as text (`"5.00"`) from most clients, but a bare number is accepted too.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum RatingInput {
    Text(String),
    Number(serde_json::Number),
}

// Matches the `NUMERIC(3, 2)` column: two decimal places, magnitude below 10.
const RATING_SCALE: u32 = 2;
const RATING_LIMIT: Decimal = Decimal::TEN;

impl RatingInput {
    /// Normalize to the text the column stores, e.g. `1` -> `1.00`.
    ///
    /// Rounds half away from zero to two places, the way Postgres casts to `NUMERIC(3, 2)`.
    fn into_decimal_text(self) -> Result<String, ApiError> {
        let raw = match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        };
        let raw = raw.trim();

        let parsed = raw
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| ApiError::invalid_field("rating"))?;

        let mut rating = parsed
            .round_dp_with_strategy(RATING_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rating.abs() >= RATING_LIMIT {
            return Err(ApiError::invalid_field("rating"));
        }
        rating.rescale(RATING_SCALE);

        Ok(rating.to_string())
    }
}

/// Candidate bookmark as sent by the client. Required fields are checked in
/// [`CreateBookmarkRequest::validate`] so the error names the missing one.
#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "5.00")]
    pub rating: Option<RatingInput>,
}

impl CreateBookmarkRequest {
    /// Checks `title`, `url`, `rating` in that order and reports the first one missing,
    /// then normalizes `rating` to two decimal places.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming the missing or malformed field.
    pub fn validate(self) -> Result<NewBookmark, ApiError> {
        let Some(title) = self.title else {
            return Err(ApiError::missing_field("title"));
        };
        let Some(url) = self.url else {
            return Err(ApiError::missing_field("url"));
        };
        let Some(rating) = self.rating else {
            return Err(ApiError::missing_field("rating"));
        };

        Ok(NewBookmark {
            title,
            url,
            description: self.description,
            rating: rating.into_decimal_text()?,
        })
    }
}

/// Path ids that are not integers cannot name a row, so they read as not found.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/bookmarks",
    responses(
        (status = 200, description = "All bookmarks, sanitized.", body = [Bookmark]),
        (status = 401, description = "Missing or invalid bearer token."),
    ),
    tag = "bookmarks"
)]
#[instrument(skip(store))]
pub async fn list_bookmarks(store: Extension<SharedStore>) -> Result<impl IntoResponse, ApiError> {
    let bookmarks: Vec<Bookmark> = store
        .list()
        .await?
        .into_iter()
        .map(Bookmark::sanitized)
        .collect();

    debug!("Listing {} bookmarks", bookmarks.len());

    Ok(Json(bookmarks))
}

#[utoipa::path(
    get,
    path = "/bookmarks/{id}",
    params(("id" = i32, Path, description = "Bookmark id")),
    responses(
        (status = 200, description = "Bookmark detail, sanitized.", body = Bookmark),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 404, description = "Bookmark doesn't exist."),
    ),
    tag = "bookmarks"
)]
#[instrument(skip(store))]
pub async fn get_bookmark(
    Path(id): Path<String>,
    store: Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;

    match store.get(id).await? {
        Some(bookmark) => Ok(Json(bookmark.sanitized())),
        None => {
            debug!("Bookmark {id} not found");
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    post,
    path = "/bookmarks",
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created.", body = Bookmark),
        (status = 400, description = "A required field is missing, the rating cannot be stored, or the body is not JSON."),
        (status = 401, description = "Missing or invalid bearer token."),
    ),
    tag = "bookmarks"
)]
#[instrument(skip(store, payload))]
pub async fn create_bookmark(
    store: Extension<SharedStore>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected create payload: {rejection}");
        ApiError::Validation("Invalid JSON body".to_string())
    })?;

    let candidate = request.validate()?;
    let bookmark = store.insert(candidate).await?;

    info!("Bookmark with id {} created", bookmark.id);

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/bookmarks/{}", bookmark.id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(bookmark.sanitized())))
}

#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    params(("id" = i32, Path, description = "Bookmark id")),
    responses(
        (status = 204, description = "Bookmark deleted."),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 404, description = "Bookmark doesn't exist."),
    ),
    tag = "bookmarks"
)]
#[instrument(skip(store))]
pub async fn delete_bookmark(
    Path(id): Path<String>,
    store: Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;

    if store.delete(id).await? {
        info!("Bookmark with id {id} deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        debug!("Bookmark {id} not found");
        Err(ApiError::NotFound)
    }
}
