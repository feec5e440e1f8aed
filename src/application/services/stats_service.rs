//! Click statistics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::expiry;
use crate::domain::repositories::{DetailedStats, StatsFilter, StatsRepository};
use crate::error::AppError;

/// Service for retrieving click statistics for a link.
pub struct StatsService<S: StatsRepository> {
    repository: Arc<S>,
}

impl<S: StatsRepository> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Retrieves statistics for a short code.
    ///
    /// Returns the link snapshot, the total click count, a page of click
    /// records, and whether the link is expired at `now`. Expiration is
    /// computed fresh on every call since the counter keeps moving.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(
        &self,
        code: &str,
        filter: StatsFilter,
        now: DateTime<Utc>,
    ) -> Result<(DetailedStats, bool), AppError> {
        let stats = self
            .repository
            .get_stats_by_code(code, filter)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_id": code }))
            })?;

        let is_expired = expiry::is_expired(&stats.link, now);

        Ok((stats, is_expired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Link};
    use crate::domain::repositories::MockStatsRepository;
    use chrono::Duration;

    fn stats_for(link: Link, clicks: Vec<Click>) -> DetailedStats {
        DetailedStats {
            total: clicks.len() as i64,
            link,
            items: clicks,
        }
    }

    #[tokio::test]
    async fn test_get_stats_success() {
        let mut mock_repo = MockStatsRepository::new();

        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            None,
            None,
            2,
        );
        let clicks = vec![
            Click {
                code: "abc123".to_string(),
                clicked_at: now,
                user_agent: Some("Mozilla/5.0".to_string()),
                referer: None,
            },
            Click {
                code: "abc123".to_string(),
                clicked_at: now,
                user_agent: None,
                referer: None,
            },
        ];
        let detailed = stats_for(link, clicks);
        mock_repo
            .expect_get_stats_by_code()
            .times(1)
            .returning(move |_, _| Ok(Some(detailed.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let (stats, is_expired) = service
            .get_stats("abc123", StatsFilter::new(0, 25), Utc::now())
            .await
            .unwrap();

        assert_eq!(stats.link.code, "abc123");
        assert_eq!(stats.total, 2);
        assert_eq!(stats.items.len(), 2);
        assert!(!is_expired);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_get_stats_by_code()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service
            .get_stats("missing", StatsFilter::new(0, 25), Utc::now())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_reports_time_expiry() {
        let mut mock_repo = MockStatsRepository::new();

        let now = Utc::now();
        let link = Link::new(
            "old".to_string(),
            "https://example.com".to_string(),
            now - Duration::days(2),
            Some(now - Duration::days(1)),
            None,
            0,
        );
        let detailed = stats_for(link, vec![]);
        mock_repo
            .expect_get_stats_by_code()
            .times(1)
            .returning(move |_, _| Ok(Some(detailed.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let (_, is_expired) = service
            .get_stats("old", StatsFilter::new(0, 25), now)
            .await
            .unwrap();

        assert!(is_expired);
    }

    #[tokio::test]
    async fn test_get_stats_reports_click_exhaustion() {
        let mut mock_repo = MockStatsRepository::new();

        let link = Link::new(
            "capped".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            None,
            Some(1),
            1,
        );
        let detailed = stats_for(link, vec![]);
        mock_repo
            .expect_get_stats_by_code()
            .times(1)
            .returning(move |_, _| Ok(Some(detailed.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let (_, is_expired) = service
            .get_stats("capped", StatsFilter::new(0, 25), Utc::now())
            .await
            .unwrap();

        assert!(is_expired);
    }
}
