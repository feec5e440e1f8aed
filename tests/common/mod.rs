#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use shortleaf::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler,
};
use shortleaf::state::AppState;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), "http://localhost:3000".to_string())
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    insert_link(pool, code, url, None, None, 0).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    insert_link(
        pool,
        code,
        url,
        Some(Utc::now() - Duration::hours(1)),
        None,
        0,
    )
    .await;
}

pub async fn create_capped_link(pool: &SqlitePool, code: &str, url: &str, max_clicks: i64) {
    insert_link(pool, code, url, None, Some(max_clicks), 0).await;
}

async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
    max_clicks: Option<i64>,
    click_count: i64,
) {
    sqlx::query(
        r#"
        INSERT INTO links (code, long_url, created_at, expires_at, max_clicks, click_count)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .bind(expires_at)
    .bind(max_clicks)
    .bind(click_count)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get_click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_click_rows(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
