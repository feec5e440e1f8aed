//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde_json::json;

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::stats::StatsResponse;
use crate::domain::repositories::StatsFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Click records per page (default: 25, max: 1000)
///
/// # Response
///
/// Returns link metadata, the click counter, the computed `isExpired` flag,
/// and a page of click records.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<StatsResponse>, AppError> {
    let window = params
        .resolve()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (stats, is_expired) = state
        .stats_service
        .get_stats(&code, StatsFilter::new(window.offset, window.limit), Utc::now())
        .await?;

    let total_pages = (stats.total as f64 / window.page_size as f64).ceil() as u32;

    Ok(Json(StatsResponse {
        short_id: stats.link.code,
        original_url: stats.link.long_url,
        created_at: stats.link.created_at,
        click_count: stats.link.click_count,
        expires_at: stats.link.expires_at,
        max_clicks: stats.link.max_clicks,
        is_expired,
        pagination: PaginationMeta {
            page: window.page,
            page_size: window.page_size,
            total_items: stats.total,
            total_pages,
        },
        clicks: stats
            .items
            .into_iter()
            .map(|click| ClickInfo {
                clicked_at: click.clicked_at,
                user_agent: click.user_agent,
                referer: click.referer,
            })
            .collect(),
    }))
}
