//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its expiration policy and click counter.
///
/// `code` is the short identifier visitors use and the primary key in the
/// store. Everything except `click_count` is immutable after creation.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_clicks: Option<i64>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        max_clicks: Option<i64>,
        click_count: i64,
    ) -> Self {
        Self {
            code,
            long_url,
            created_at,
            expires_at,
            max_clicks,
            click_count,
        }
    }
}

/// Input data for creating a new link.
///
/// The click counter always starts at zero, so it is not part of the input.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_clicks: Option<i64>,
}
