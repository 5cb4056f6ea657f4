//! CLI administration tool for shorty.
//!
//! Runs the same services as the HTTP server directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin shorty-admin -- db check
//!
//! # Apply migrations
//! cargo run --bin shorty-admin -- db migrate
//!
//! # Create a shortcode
//! cargo run --bin shorty-admin -- shorten https://example.com --code example
//!
//! # View statistics for a shortcode
//! cargo run --bin shorty-admin -- stats example
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`.

use shorty::application::services::{ShortenService, StatsService};
use shorty::config;
use shorty::domain::repositories::ShortcodeRepository;
use shorty::infrastructure::database;
use shorty::infrastructure::persistence::PgShortcodeRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorty.
#[derive(Parser)]
#[command(name = "shorty-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a shortcode for a URL
    Shorten {
        /// Destination URL
        url: String,

        /// Desired shortcode (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show visit statistics for a shortcode
    Stats {
        /// Shortcode to inspect
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = database::connect(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Shorten { url, code } => {
            let service = ShortenService::new(repository(&pool));
            shorten(&service, url, code).await?;
        }
        Commands::Stats { code } => {
            let service = StatsService::new(repository(&pool));
            show_stats(&service, &code).await?;
        }
    }

    pool.close().await;
    Ok(())
}

fn repository(pool: &PgPool) -> Arc<dyn ShortcodeRepository> {
    Arc::new(PgShortcodeRepository::new(Arc::new(pool.clone())))
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check query failed")?;
            println!("{} Database connection OK", "✓".green().bold());
        }
        DbAction::Migrate => {
            database::migrate(pool).await?;
            println!("{} Migrations applied", "✓".green().bold());
        }
    }

    Ok(())
}

/// Creates a shortcode and prints it.
async fn shorten(
    service: &ShortenService<dyn ShortcodeRepository>,
    url: String,
    code: Option<String>,
) -> Result<()> {
    let created = service
        .shorten(Some(url), code)
        .await
        .context("Failed to create shortcode")?;

    println!("{} Created shortcode", "✓".green().bold());
    println!("  {}: {}", "Shortcode".bold(), created.code.cyan());
    println!(
        "  {}: {}",
        "Created".bold(),
        created.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}

/// Prints statistics for a shortcode.
async fn show_stats(service: &StatsService<dyn ShortcodeRepository>, code: &str) -> Result<()> {
    let stats = service
        .stats(code)
        .await
        .with_context(|| format!("Failed to load stats for '{code}'"))?;

    println!("{}", format!("Statistics for {code}").bold().underline());
    println!(
        "  {}: {}",
        "Created".bold(),
        stats.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {}: {}",
        "Redirects".bold(),
        stats.redirect_count.to_string().cyan()
    );

    match stats.last_visited_at {
        Some(at) => println!(
            "  {}: {}",
            "Last visit".bold(),
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("  {}: {}", "Last visit".bold(), "never".dimmed()),
    }

    Ok(())
}
