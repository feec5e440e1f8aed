//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "customId": "my-link",     // optional
///   "expiresInDays": 30,       // optional
///   "maxClicks": 100           // optional
/// }
/// ```
///
/// # Response
///
/// 200 with `{shortUrl, shortId}` plus `expiresAt` / `maxClicks` when a
/// policy was requested.
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 409 Conflict if the
/// custom id is taken, 500 if id allocation is exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(
            payload.original_url,
            payload.custom_id,
            payload.expires_in_days,
            payload.max_clicks,
        )
        .await?;

    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    tracing::info!(short_id = %link.code, "created short link");

    Ok(Json(ShortenResponse {
        short_url,
        short_id: link.code,
        expires_at: link.expires_at,
        max_clicks: link.max_clicks,
    }))
}
