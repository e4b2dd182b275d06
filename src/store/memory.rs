use super::{Bookmark, BookmarkStore, NewBookmark};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Bookmark>,
    last_id: i32,
}

/// In-process `bookmarks_table` used by tests and local runs.
///
/// Rows keep insertion order. Ids behave like a serial column: each insert
/// takes the next value past the highest id ever seen, including seeded rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert fixture rows with their ids as given.
    pub async fn seed<I>(&self, bookmarks: I)
    where
        I: IntoIterator<Item = Bookmark>,
    {
        let mut table = self.table.write().await;
        for bookmark in bookmarks {
            table.last_id = table.last_id.max(bookmark.id);
            table.rows.push(bookmark);
        }
    }

    /// Remove every row and restart the id sequence.
    pub async fn truncate(&self) {
        let mut table = self.table.write().await;
        table.rows.clear();
        table.last_id = 0;
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Bookmark>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow!("bookmark id sequence exhausted at {}", table.last_id))?;
        table.last_id = id;

        let row = Bookmark {
            id,
            title: bookmark.title,
            url: bookmark.url,
            description: bookmark.description,
            rating: bookmark.rating,
        };
        table.rows.push(row.clone());

        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);

        Ok(table.rows.len() < before)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
