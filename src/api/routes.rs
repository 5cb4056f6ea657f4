//! API route configuration.

use crate::api::handlers::{
    redirect_handler, shorten_handler, shorten_path_redirect_handler, stats_handler,
};
use crate::error::{AppError, MSG_NOT_FOUND};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes. None of them require authentication.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create a shortcode
/// - `GET  /shorten`              - Redirect for the `shorten` shortcode
/// - `GET  /{shortcode}`          - Redirect to the destination URL
/// - `GET  /{shortcode}/stats`    - Visit statistics
///
/// Unmatched paths and methods get the uniform JSON 404 / 405 bodies.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler).get(shorten_path_redirect_handler))
        .route("/{shortcode}", get(redirect_handler))
        .route("/{shortcode}/stats", get(stats_handler))
        .fallback(fallback_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
}

async fn fallback_handler() -> AppError {
    AppError::not_found(MSG_NOT_FOUND)
}

async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
