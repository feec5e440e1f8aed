//! Repository trait for click recording and statistics.

use crate::domain::entities::{Click, Link, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Statistics for a single link with its paginated click records.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub link: Link,
    /// Total number of recorded click events for this link.
    pub total: i64,
    pub items: Vec<Click>,
}

/// Pagination window for click record queries.
#[derive(Debug, Clone)]
pub struct StatsFilter {
    pub offset: i64,
    pub limit: i64,
}

impl StatsFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}

/// Repository interface for click tracking and statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends a click event. Clicks are append-only and never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Retrieves a link with its click records for the given window.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DetailedStats))` if the link exists
    /// - `Ok(None)` if the link is not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_stats_by_code(
        &self,
        code: &str,
        filter: StatsFilter,
    ) -> Result<Option<DetailedStats>, AppError>;
}
