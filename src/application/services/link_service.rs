//! Link creation service: shortening and identifier allocation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_long_url;

/// Generation attempts before allocation gives up.
///
/// Running out of attempts means the identifier space or the store is in an
/// unexpected state, surfaced as a 500.
const MAX_ATTEMPTS: usize = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Service for creating shortened links.
///
/// Validates the long URL, allocates a collision-free short code (custom or
/// generated), and persists the new link.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The original URL to shorten (absolute HTTP(S))
    /// - `custom_code` - Optional caller-chosen short id (validated if provided)
    /// - `expires_in_days` - Optional lifetime; fractional days are allowed
    /// - `max_clicks` - Optional click allowance
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom id is invalid.
    /// Returns [`AppError::Conflict`] if the custom id is already taken.
    /// Returns [`AppError::Internal`] if generation runs out of attempts
    /// or the store fails.
    pub async fn shorten(
        &self,
        long_url: String,
        custom_code: Option<String>,
        expires_in_days: Option<f64>,
        max_clicks: Option<i64>,
    ) -> Result<Link, AppError> {
        validate_long_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let code = self.allocate_code(custom_code).await?;

        let created_at = Utc::now();
        let expires_at = expires_in_days
            .map(|days| created_at + Duration::milliseconds((days * MILLIS_PER_DAY) as i64));

        let new_link = NewLink {
            code,
            long_url,
            created_at,
            expires_at,
            max_clicks,
        };

        self.link_repository.create(new_link).await
    }

    /// Allocates a short code, resolving collisions.
    ///
    /// A custom id is used verbatim after validation and an existence check;
    /// it is never regenerated. Without one, random codes are generated
    /// until a free one is found or the attempts run out.
    async fn allocate_code(&self, custom_code: Option<String>) -> Result<String, AppError> {
        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.link_repository.exists(&custom).await? {
                return Err(AppError::conflict(
                    "Custom id already exists",
                    json!({ "custom_id": custom }),
                ));
            }

            return Ok(custom);
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if !self.link_repository.exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to allocate short id",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
