//! PostgreSQL implementation of the shortcode repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::ShortcodeRepository;
use crate::error::AppError;

/// PostgreSQL repository for shortcode storage.
///
/// Every operation is a single parameterized statement; uniqueness and counter
/// atomicity are delegated to the database. Connections are taken from the
/// pool per query and returned on drop.
pub struct PgShortcodeRepository {
    pool: Arc<PgPool>,
}

impl PgShortcodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UrlRow {
    url: String,
    shortcode: String,
    created_at: DateTime<Utc>,
    redirects: i64,
    updated_at: Option<DateTime<Utc>>,
}

impl From<UrlRow> for ShortenedUrl {
    fn from(row: UrlRow) -> Self {
        ShortenedUrl::new(
            row.url,
            row.shortcode,
            row.created_at,
            // guarded by the urls_redirects_non_negative check constraint
            u64::try_from(row.redirects).unwrap_or_default(),
            row.updated_at,
        )
    }
}

#[async_trait]
impl ShortcodeRepository for PgShortcodeRepository {
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (url, shortcode)
            VALUES ($1, $2)
            RETURNING url, shortcode, created_at, redirects, updated_at
            "#,
        )
        .bind(&new_url.url)
        .bind(&new_url.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT url, shortcode, created_at, redirects, updated_at
            FROM urls
            WHERE shortcode = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_redirect(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET redirects = redirects + 1, updated_at = NOW()
            WHERE shortcode = $1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
