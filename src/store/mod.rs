//! Bookmark persistence.
//!
//! Handlers only see the [`BookmarkStore`] trait. Each method maps to exactly
//! one statement against `bookmarks_table`, so there are no multi-step
//! transactions to coordinate and concurrency control stays with the store.

mod memory;
mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

use crate::sanitize::{clean_description, escape_title};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored bookmark row.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    /// Decimal text such as `5.00`.
    pub rating: String,
}

impl Bookmark {
    /// Apply the output policy: escape `title`, sanitize `description`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            title: escape_title(&self.title),
            description: self.description.as_deref().map(clean_description),
            ..self
        }
    }
}

/// A validated candidate for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: String,
}

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks in the store's natural order.
    async fn list(&self) -> Result<Vec<Bookmark>>;

    async fn get(&self, id: i32) -> Result<Option<Bookmark>>;

    /// Insert and return the stored row, including its assigned id.
    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Cheap liveness probe used by `/health`.
    async fn ping(&self) -> Result<()>;
}
