//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for link storage and retrieval.
///
/// Uses runtime-bound prepared statements; the `code` primary key enforces
/// short id uniqueness at the store level.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    max_clicks: Option<i64>,
    click_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.code,
            row.long_url,
            row.created_at,
            row.expires_at,
            row.max_clicks,
            row.click_count,
        )
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM links WHERE code = ?1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(found != 0)
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        sqlx::query(
            r#"
            INSERT INTO links (code, long_url, created_at, expires_at, max_clicks, click_count)
            VALUES (?1, ?2, ?3, ?4, ?5, 0)
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .bind(new_link.max_clicks)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Link::new(
            new_link.code,
            new_link.long_url,
            new_link.created_at,
            new_link.expires_at,
            new_link.max_clicks,
            0,
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, created_at, expires_at, max_clicks, click_count
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE code = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
