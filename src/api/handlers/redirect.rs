//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde_json::json;

use crate::application::services::{ClientMeta, RedirectOutcome};
use crate::domain::expiry::ExpiryReason;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Capture client metadata (user agent, referrer) from headers
/// 2. Resolve the code: lookup, expiration check, click recording
/// 3. Return 307 Temporary Redirect to the original URL
///
/// The click counter increment and the click event append complete before
/// the redirect is returned; an expired or unknown code records nothing.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired, with the body distinguishing
/// time expiry from click-limit exhaustion.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let meta = ClientMeta {
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        referer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let outcome = state
        .redirect_service
        .resolve(&code, Utc::now(), meta)
        .await?;

    match outcome {
        RedirectOutcome::Success { long_url } => Ok(Redirect::temporary(&long_url)),
        RedirectOutcome::NotFound => Err(AppError::not_found(
            "Short link not found",
            json!({ "short_id": code }),
        )),
        RedirectOutcome::Expired(reason) => {
            let message = match reason {
                ExpiryReason::Expired => "Short link has expired",
                ExpiryReason::ClickLimitReached => "Short link click limit reached",
            };
            Err(AppError::gone(reason, message, json!({ "short_id": code })))
        }
    }
}
