//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::domain::entities::ShortcodeStats;

/// Visit statistics for a shortcode.
///
/// `lastSeenDate` is omitted until the first redirect.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub start_date: DateTime<Utc>,
    pub redirect_count: u64,
    pub last_seen_date: Option<DateTime<Utc>>,
}

impl From<ShortcodeStats> for StatsResponse {
    fn from(stats: ShortcodeStats) -> Self {
        Self {
            start_date: stats.created_at,
            redirect_count: stats.redirect_count,
            last_seen_date: stats.last_visited_at,
        }
    }
}
