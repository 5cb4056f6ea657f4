//! Handler for shortcode statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns visit statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /{shortcode}/stats`
///
/// # Response
///
/// ```json
/// {
///   "startDate": "2026-01-02T03:04:05Z",
///   "redirectCount": 1,
///   "lastSeenDate": "2026-01-03T10:00:00Z"
/// }
/// ```
///
/// `lastSeenDate` is omitted for a shortcode that was never visited.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is not valid UTF-8.
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    shortcode: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(shortcode) = shortcode?;
    let stats = state.stats_service.stats(&shortcode).await?;

    Ok(Json(stats.into()))
}
