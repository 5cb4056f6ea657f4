//! Shortened URL entity: the mapping from a shortcode to its destination.

use chrono::{DateTime, Utc};

/// A stored shortcode with its visit counters.
///
/// `code` is fixed at creation. The counters change only through the store's
/// atomic increment, so `redirect_count` never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub url: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub redirect_count: u64,
    pub last_visited_at: Option<DateTime<Utc>>,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(
        url: String,
        code: String,
        created_at: DateTime<Utc>,
        redirect_count: u64,
        last_visited_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            url,
            code,
            created_at,
            redirect_count,
            last_visited_at,
        }
    }
}

/// Input data for creating a new shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortenedUrl {
    pub url: String,
    pub code: String,
}

/// Result of a successful shorten operation.
///
/// Carries no destination URL: the creation response never echoes it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortcode {
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortenedUrl> for CreatedShortcode {
    fn from(record: ShortenedUrl) -> Self {
        Self {
            code: record.code,
            created_at: record.created_at,
        }
    }
}

/// Visit statistics for a shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeStats {
    pub created_at: DateTime<Utc>,
    pub redirect_count: u64,
    pub last_visited_at: Option<DateTime<Utc>>,
}

impl From<ShortenedUrl> for ShortcodeStats {
    fn from(record: ShortenedUrl) -> Self {
        Self {
            created_at: record.created_at,
            redirect_count: record.redirect_count,
            last_visited_at: record.last_visited_at,
        }
    }
}
