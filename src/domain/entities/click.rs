//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Captures client metadata (user agent, referrer) for analytics. Rows are
/// append-only; a click is never updated or removed.
#[derive(Debug, Clone)]
pub struct Click {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Input data for recording a new click event.
///
/// Metadata fields are optional because clients may withhold them; an absent
/// value is stored as an explicit NULL rather than being dropped.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_with_all_fields() {
        let now = Utc::now();
        let click = Click {
            code: "abc123".to_string(),
            clicked_at: now,
            user_agent: Some("Mozilla/5.0".to_string()),
            referer: Some("https://google.com".to_string()),
        };

        assert_eq!(click.code, "abc123");
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(click.referer, Some("https://google.com".to_string()));
    }

    #[test]
    fn test_new_click_minimal() {
        let new_click = NewClick {
            code: "abc123".to_string(),
            clicked_at: Utc::now(),
            user_agent: None,
            referer: None,
        };

        assert!(new_click.user_agent.is_none());
        assert!(new_click.referer.is_none());
    }
}
