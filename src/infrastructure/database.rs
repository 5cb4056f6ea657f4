//! Connection pool bootstrapping.
//!
//! The pool is built once at startup from [`Config`] and then shared through
//! `Arc`; nothing holds a process-wide connection handle.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Upper bound for a single backoff step between connection attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Builds pool options from configuration.
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
}

/// Connects to PostgreSQL, retrying with exponential backoff.
///
/// Makes `config.db_connect_retries` additional attempts after the first one
/// (200ms, 400ms, 800ms... capped at 5s, with jitter).
///
/// # Errors
///
/// Returns the last connection error once all attempts are exhausted.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(MAX_RETRY_DELAY)
        .map(jitter)
        .take(config.db_connect_retries);

    let mut attempt = 0u32;
    let pool = Retry::spawn(strategy, || {
        attempt += 1;
        let current = attempt;
        let options = pool_options(config);
        let url = config.database_url.clone();
        async move {
            options.connect(&url).await.inspect_err(|e| {
                tracing::warn!(attempt = current, error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Applies pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
