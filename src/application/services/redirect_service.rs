//! Redirect resolution service.
//!
//! The request-facing entry point of the core: looks up a short code,
//! enforces the expiration policy, records the click, and hands back the
//! original URL.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::NewClick;
use crate::domain::expiry::{self, ExpiryReason};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// Client metadata captured with each click.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Terminal outcome of a single redirect attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// No link exists for the code.
    NotFound,
    /// The link exists but its expiration policy rejects it. No click is
    /// recorded and the counter is untouched.
    Expired(ExpiryReason),
    /// The link is valid; the click has been recorded.
    Success { long_url: String },
}

/// Service resolving short codes to their original URLs.
pub struct RedirectService<L: LinkRepository, S: StatsRepository> {
    link_repository: Arc<L>,
    stats_repository: Arc<S>,
}

impl<L: LinkRepository, S: StatsRepository> RedirectService<L, S> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, stats_repository: Arc<S>) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Resolves a short code at `now`.
    ///
    /// Validity is checked against the counter as stored, before this call's
    /// increment. A link with `max_clicks = N` therefore honors its Nth
    /// click and rejects only the (N+1)th. On success the counter increment
    /// and the click append both complete before the URL is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures; expiry and unknown
    /// codes are outcomes, not errors.
    pub async fn resolve(
        &self,
        code: &str,
        now: DateTime<Utc>,
        meta: ClientMeta,
    ) -> Result<RedirectOutcome, AppError> {
        let Some(link) = self.link_repository.find_by_code(code).await? else {
            return Ok(RedirectOutcome::NotFound);
        };

        if let Some(reason) = expiry::expiry_reason(&link, now) {
            tracing::debug!(code, reason = reason.as_str(), "rejected expired link");
            return Ok(RedirectOutcome::Expired(reason));
        }

        self.link_repository.increment_clicks(code).await?;

        self.stats_repository
            .record_click(NewClick {
                code: code.to_string(),
                clicked_at: now,
                user_agent: meta.user_agent,
                referer: meta.referer,
            })
            .await?;

        Ok(RedirectOutcome::Success {
            long_url: link.long_url,
        })
    }
}
