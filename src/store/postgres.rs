use super::{Bookmark, BookmarkStore, NewBookmark};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, Connection, PgPool, Row};
use tracing::{info_span, Instrument};

// `rating` is NUMERIC in the table; read it back as text so `5.00` keeps its scale.
const SELECT_COLUMNS: &str = "id, title, url, description, rating::text AS rating";

/// `bookmarks_table` backed by a Postgres pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn bookmark_from_row(row: &PgRow) -> Result<Bookmark> {
    Ok(Bookmark {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        description: row.try_get("description")?,
        rating: row.try_get("rating")?,
    })
}

#[async_trait]
impl BookmarkStore for PgStore {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM bookmarks_table ORDER BY id");
        let span = info_span!("db.query", db.system = "postgresql", db.operation = "SELECT");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .instrument(span)
            .await
            .context("Failed to list bookmarks")?;

        rows.iter().map(bookmark_from_row).collect()
    }

    async fn get(&self, id: i32) -> Result<Option<Bookmark>> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM bookmarks_table WHERE id = $1");
        let span = info_span!("db.query", db.system = "postgresql", db.operation = "SELECT");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .with_context(|| format!("Failed to fetch bookmark {id}"))?;

        row.as_ref().map(bookmark_from_row).transpose()
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark> {
        let query = format!(
            "INSERT INTO bookmarks_table (title, url, description, rating) \
             VALUES ($1, $2, $3, $4::numeric) \
             RETURNING {SELECT_COLUMNS}"
        );
        let span = info_span!("db.query", db.system = "postgresql", db.operation = "INSERT");

        let row = sqlx::query(&query)
            .bind(&bookmark.title)
            .bind(&bookmark.url)
            .bind(&bookmark.description)
            .bind(&bookmark.rating)
            .fetch_one(&self.pool)
            .instrument(span)
            .await
            .context("Failed to insert bookmark")?;

        bookmark_from_row(&row)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let span = info_span!("db.query", db.system = "postgresql", db.operation = "DELETE");

        let result = sqlx::query("DELETE FROM bookmarks_table WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .instrument(span)
            .await
            .with_context(|| format!("Failed to delete bookmark {id}"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn ping(&self) -> Result<()> {
        let acquire_span = info_span!(
            "db.acquire",
            db.system = "postgresql",
            db.operation = "ACQUIRE"
        );
        let mut conn = self
            .pool
            .acquire()
            .instrument(acquire_span)
            .await
            .context("Failed to acquire database connection")?;

        let ping_span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        conn.ping()
            .instrument(ping_span)
            .await
            .context("Failed to ping database")
    }
}
