//! Route handlers for the bookmarks API.

pub mod bookmarks;
pub mod health;

use crate::store::BookmarkStore;
use std::sync::Arc;

/// Store handle injected into every handler via `Extension`.
pub type SharedStore = Arc<dyn BookmarkStore>;
