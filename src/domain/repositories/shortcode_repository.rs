//! Repository trait for shortcode persistence.

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from shortcode to record, with atomic create and increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortcodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_shortcode.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcodeRepository: Send + Sync {
    /// Persists a new record.
    ///
    /// Must rely on the store's uniqueness constraint: when two callers race on
    /// the same code, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Finds a record by exact shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Increments the redirect counter and stamps the visit time in a single
    /// statement.
    ///
    /// Returns `Ok(false)` if no record matches `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_redirect(&self, code: &str) -> Result<bool, AppError>;
}
