//! Handler for shortcode redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Shortcode that shares its path with the shorten endpoint.
pub const SHORTEN_PATH_CODE: &str = "shorten";

/// Redirects a shortcode to its destination URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the shortcode
/// 2. Atomically increment its redirect counter and stamp the visit time
/// 3. Return `302 Found` with the destination in `Location`
///
/// The visit is recorded before responding; if recording fails no redirect
/// is issued.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is not valid UTF-8.
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    shortcode: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(shortcode) = shortcode?;

    redirect(&state, &shortcode).await
}

/// `GET /shorten`: the literal route takes precedence over `/{shortcode}`, so
/// the `shorten` code is redirected from here.
pub async fn shorten_path_redirect_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, SHORTEN_PATH_CODE).await
}

async fn redirect(state: &AppState, shortcode: &str) -> Result<Response, AppError> {
    let location = state.redirect_service.resolve(shortcode).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
