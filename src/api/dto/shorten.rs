//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom id validation.
static CUSTOM_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Request to shorten a URL.
///
/// Field names are camelCase on the wire. Optional expiration policies can
/// be combined; whichever triggers first wins.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional caller-chosen short id.
    #[validate(length(min = 3, max = 20))]
    #[validate(regex(
        path = "*CUSTOM_ID_REGEX",
        message = "Custom id can only contain letters, digits, underscores, and hyphens"
    ))]
    pub custom_id: Option<String>,

    /// Optional lifetime in days (fractional allowed, at most one year).
    #[validate(range(exclusive_min = 0.0, max = 365.0))]
    pub expires_in_days: Option<f64>,

    /// Optional click allowance; the link expires once it is used up.
    #[validate(range(min = 1))]
    pub max_clicks: Option<i64>,
}

/// Response for a newly shortened URL.
///
/// Expiration fields are echoed back only when set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_clicks: Option<i64>,
}
