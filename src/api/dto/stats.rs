//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use super::pagination::PaginationMeta;

/// Statistics for a specific short link.
///
/// `is_expired` reflects the link's validity at the moment of the query;
/// it is never cached since the click counter keeps moving.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_clicks: Option<i64>,

    pub is_expired: bool,

    pub pagination: PaginationMeta,
    pub clicks: Vec<ClickInfo>,
}
