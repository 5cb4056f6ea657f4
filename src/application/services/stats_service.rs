//! Shortcode statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortcodeStats;
use crate::domain::repositories::ShortcodeRepository;
use crate::error::{AppError, MSG_SHORTCODE_NOT_FOUND};

/// Read-only access to visit statistics.
pub struct StatsService<R: ShortcodeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortcodeRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns creation time, redirect count and last visit time for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `code`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<ShortcodeStats, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(ShortcodeStats::from)
            .ok_or_else(|| AppError::not_found(MSG_SHORTCODE_NOT_FOUND))
    }
}
