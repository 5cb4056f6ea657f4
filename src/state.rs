//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::domain::repositories::ShortcodeRepository;

/// Services shared by all request handlers.
///
/// Built around a single repository handle; cloning the state only clones `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn ShortcodeRepository>>,
    pub redirect_service: Arc<RedirectService<dyn ShortcodeRepository>>,
    pub stats_service: Arc<StatsService<dyn ShortcodeRepository>>,
}

impl AppState {
    /// Creates the state with every service backed by `repository`.
    pub fn new(repository: Arc<dyn ShortcodeRepository>) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
        }
    }
}
