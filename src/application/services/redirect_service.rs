//! Shortcode resolution service.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::domain::repositories::ShortcodeRepository;
use crate::error::{AppError, MSG_INTERNAL, MSG_SHORTCODE_NOT_FOUND};

/// Resolves shortcodes to their destination and records the visit.
pub struct RedirectService<R: ShortcodeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortcodeRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the destination of `code` as a `Location` value after counting
    /// the visit.
    ///
    /// The visit is recorded with the store's atomic increment, and only once
    /// the destination is known to be sendable. If recording fails the
    /// redirect is aborted; a visit is never silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `code`.
    /// Returns [`AppError::Internal`] on database errors or when the stored
    /// URL cannot be carried in a header.
    pub async fn resolve(&self, code: &str) -> Result<HeaderValue, AppError> {
        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                tracing::debug!(code, "Unknown shortcode");
                AppError::not_found(MSG_SHORTCODE_NOT_FOUND)
            })?;

        let location = HeaderValue::try_from(record.url).map_err(|e| {
            tracing::error!(code, error = %e, "Stored URL is not a valid Location header");
            AppError::internal(MSG_INTERNAL)
        })?;

        if !self.repository.increment_redirect(code).await? {
            tracing::warn!(code, "Shortcode vanished before the visit was recorded");
            return Err(AppError::not_found(MSG_SHORTCODE_NOT_FOUND));
        }

        Ok(location)
    }
}
