//! SQLite implementation of the stats repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Click, Link, NewClick};
use crate::domain::repositories::{DetailedStats, StatsFilter, StatsRepository};
use crate::error::AppError;

/// SQLite repository for click tracking and statistics queries.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    code: String,
    clicked_at: DateTime<Utc>,
    user_agent: Option<String>,
    referer: Option<String>,
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

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO link_clicks (code, clicked_at, user_agent, referer)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new_click.code)
        .bind(new_click.clicked_at)
        .bind(&new_click.user_agent)
        .bind(&new_click.referer)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get_stats_by_code(
        &self,
        code: &str,
        filter: StatsFilter,
    ) -> Result<Option<DetailedStats>, AppError> {
        let Some(row) = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, created_at, expires_at, max_clicks, click_count
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let link = Link::new(
            row.code,
            row.long_url,
            row.created_at,
            row.expires_at,
            row.max_clicks,
            row.click_count,
        );

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE code = ?1")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        let clicks = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT code, clicked_at, user_agent, referer
            FROM link_clicks
            WHERE code = ?1
            ORDER BY clicked_at DESC, id DESC
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(code)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let items = clicks
            .into_iter()
            .map(|c| Click {
                code: c.code,
                clicked_at: c.clicked_at,
                user_agent: c.user_agent,
                referer: c.referer,
            })
            .collect();

        Ok(Some(DetailedStats { link, total, items }))
    }
}
