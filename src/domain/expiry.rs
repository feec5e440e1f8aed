//! Expiration evaluation for shortened links.
//!
//! A link can become invalid in two ways: its expiry time has passed, or its
//! click allowance is used up. The check is a pure predicate over a link
//! snapshot and an explicit `now`, re-evaluated on every redirect and stats
//! read since the click counter changes continuously.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Why a link is no longer valid for redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryReason {
    /// `expires_at` has passed.
    Expired,
    /// `click_count` has reached `max_clicks`.
    ClickLimitReached,
}

impl ExpiryReason {
    /// Machine-readable code used in 410 response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryReason::Expired => "expired",
            ExpiryReason::ClickLimitReached => "click-limit-reached",
        }
    }
}

/// Returns why `link` is invalid at `now`, or `None` while it is still live.
///
/// A link is valid up to and including its exact `expires_at` instant; only
/// `now > expires_at` invalidates it. The click limit compares against the
/// counter as stored, so the caller must evaluate this before incrementing
/// for the current request. When both conditions hold, the time-based reason
/// wins.
pub fn expiry_reason(link: &Link, now: DateTime<Utc>) -> Option<ExpiryReason> {
    if link.expires_at.is_some_and(|e| now > e) {
        return Some(ExpiryReason::Expired);
    }

    if link.max_clicks.is_some_and(|max| link.click_count >= max) {
        return Some(ExpiryReason::ClickLimitReached);
    }

    None
}

/// Convenience predicate for stats reporting.
pub fn is_expired(link: &Link, now: DateTime<Utc>) -> bool {
    expiry_reason(link, now).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn link(
        expires_at: Option<DateTime<Utc>>,
        max_clicks: Option<i64>,
        click_count: i64,
    ) -> Link {
        Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            expires_at,
            max_clicks,
            click_count,
        )
    }

    #[test]
    fn test_no_policy_never_expires() {
        let l = link(None, None, 1_000_000);
        assert_eq!(expiry_reason(&l, Utc::now()), None);
    }

    #[test]
    fn test_valid_before_expiry() {
        let now = Utc::now();
        let l = link(Some(now + Duration::hours(1)), None, 0);
        assert_eq!(expiry_reason(&l, now), None);
    }

    #[test]
    fn test_valid_at_exact_expiry_instant() {
        let now = Utc::now();
        let l = link(Some(now), None, 0);
        assert_eq!(expiry_reason(&l, now), None);
    }

    #[test]
    fn test_invalid_after_expiry() {
        let now = Utc::now();
        let l = link(Some(now - Duration::milliseconds(1)), None, 0);
        assert_eq!(expiry_reason(&l, now), Some(ExpiryReason::Expired));
    }

    #[test]
    fn test_valid_below_click_limit() {
        let l = link(None, Some(5), 4);
        assert_eq!(expiry_reason(&l, Utc::now()), None);
    }

    #[test]
    fn test_invalid_at_click_limit() {
        let l = link(None, Some(5), 5);
        assert_eq!(
            expiry_reason(&l, Utc::now()),
            Some(ExpiryReason::ClickLimitReached)
        );
    }

    #[test]
    fn test_invalid_above_click_limit() {
        let l = link(None, Some(5), 6);
        assert_eq!(
            expiry_reason(&l, Utc::now()),
            Some(ExpiryReason::ClickLimitReached)
        );
    }

    #[test]
    fn test_time_expiry_wins_over_click_limit() {
        let now = Utc::now();
        let l = link(Some(now - Duration::seconds(1)), Some(1), 1);
        assert_eq!(expiry_reason(&l, now), Some(ExpiryReason::Expired));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(ExpiryReason::Expired.as_str(), "expired");
        assert_eq!(
            ExpiryReason::ClickLimitReached.as_str(),
            "click-limit-reached"
        );
    }

    #[test]
    fn test_is_expired_matches_reason() {
        let now = Utc::now();
        let live = link(None, None, 0);
        let dead = link(Some(now - Duration::seconds(1)), None, 0);
        assert!(!is_expired(&live, now));
        assert!(is_expired(&dead, now));
    }
}
