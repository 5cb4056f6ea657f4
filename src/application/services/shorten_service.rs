//! Shortcode creation service.

use std::sync::Arc;

use crate::domain::entities::{CreatedShortcode, NewShortenedUrl};
use crate::domain::repositories::ShortcodeRepository;
use crate::error::{AppError, MSG_URL_MISSING};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_shortcode};

/// Service for creating shortcodes.
///
/// Validates input, accepts a client-chosen code or generates one, and inserts
/// the record. Uniqueness is enforced by the store alone: there is no
/// check-then-insert, and a conflict is reported as-is without retrying.
pub struct ShortenService<R: ShortcodeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortcodeRepository + ?Sized> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens `url`, optionally under `desired_code`.
    ///
    /// Without a desired code a random 6-character alphanumeric code is used.
    /// The outcome intentionally carries no URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `url` is absent
    /// - [`AppError::InvalidShortcode`] if `desired_code` does not match `^[0-9a-zA-Z_]{4,}$`
    /// - [`AppError::Conflict`] if the code is already taken
    /// - [`AppError::Internal`] on database errors
    pub async fn shorten(
        &self,
        url: Option<String>,
        desired_code: Option<String>,
    ) -> Result<CreatedShortcode, AppError> {
        let url = url.ok_or_else(|| AppError::bad_request(MSG_URL_MISSING))?;

        let code = match desired_code {
            Some(code) => {
                validate_shortcode(&code)?;
                code
            }
            None => generate_code(DEFAULT_CODE_LENGTH),
        };

        let record = self
            .repository
            .insert(NewShortenedUrl {
                url,
                code: code.clone(),
            })
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::Conflict { .. }) {
                    tracing::debug!(code = %code, "Shortcode already in use");
                }
            })?;

        tracing::info!(code = %record.code, "Shortcode created");

        Ok(record.into())
    }
}
