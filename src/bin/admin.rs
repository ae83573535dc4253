//! CLI administration tool for simple-url-shortener.
//!
//! Inspects and maintains the PostgreSQL store without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View access statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Count active and expired mappings
//! cargo run --bin admin -- db info
//!
//! # Expire a mapping ahead of its TTL
//! cargo run --bin admin -- expire 3f2a9c01b7de
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`), see
//! [`simple_url_shortener::config`].

use simple_url_shortener::config::Config;
use simple_url_shortener::domain::entities::{AccessLog, Statistics};
use simple_url_shortener::domain::repositories::{
    AccessLogRepository, StorageProbe, UrlRepository,
};
use simple_url_shortener::infrastructure::persistence::{
    PgAccessLogRepository, PgUrlRepository, pg_pool,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CLI tool for managing simple-url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show access counts and median access times
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Expire a short URL immediately
    Expire {
        /// Short key, the path segment of a short URL
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show mapping counts by state
    Info,
}

struct Repositories {
    urls: PgUrlRepository,
    access_logs: PgAccessLogRepository,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    // One-shot commands skip the startup backoff.
    config.db_connect_retries = 0;

    let pool = Arc::new(pg_pool::connect(&config).await?);
    let repos = Repositories {
        urls: PgUrlRepository::new(pool.clone(), config.db_timeout),
        access_logs: PgAccessLogRepository::new(pool, config.db_timeout),
    };

    match cli.command {
        Commands::Stats => handle_stats(&repos).await?,
        Commands::Db { action } => handle_db_action(action, &repos).await?,
        Commands::Expire { key, yes } => expire_mapping(&repos, &key, yes).await?,
    }

    Ok(())
}

/// Displays both access aggregates.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   Log     Count      Median access
///   short   2          2020-11-10 12:00:00
///   long    3          2020-11-10 12:00:05
/// ```
async fn handle_stats(repos: &Repositories) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    println!(
        "  {:<7} {:<10} {}",
        "Log".bright_white().bold(),
        "Count".bright_white().bold(),
        "Median access".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for log in AccessLog::ALL {
        let stats: Statistics = repos
            .access_logs
            .statistics(log)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch {log} statistics: {e}"))?;

        let median = stats
            .median
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<7} {:<10} {}",
            log.as_str().cyan(),
            stats.count.to_string().bright_yellow(),
            median.bright_black()
        );
    }

    println!();
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repos: &Repositories) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            match repos.urls.ping().await {
                Ok(()) => println!("{}", "✅ OK".green().bold()),
                Err(e) => {
                    println!("{}", "❌ FAILED".red().bold());
                    anyhow::bail!("Database check failed: {e}");
                }
            }
        }
        DbAction::Info => {
            println!("{}", "🗄  Database Info".bright_blue().bold());
            println!();

            let (active, expired) = repos
                .urls
                .count_by_state()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count mappings: {e}"))?;

            println!("  Active:  {}", active.to_string().green().bold());
            println!("  Expired: {}", expired.to_string().bright_black());
            println!("  Total:   {}", (active + expired).to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Tombstones a mapping after confirmation.
///
/// The key becomes unresolvable at once and stays reserved.
async fn expire_mapping(repos: &Repositories, key: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "⏱  Expire Short URL".bright_blue().bold());
    println!();

    let mapping = repos
        .urls
        .find_active(key)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {e}"))?;

    let Some(mapping) = mapping else {
        println!("{}", "⚠️  No active mapping with this key".yellow());
        return Ok(());
    };

    let last_access = mapping
        .last_access
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Key:         {}", mapping.short_key.cyan());
    println!("  Long URL:    {}", mapping.long_url.bright_white());
    println!(
        "  Created:     {}",
        mapping.created_at.format(TIMESTAMP_FORMAT).to_string().bright_black()
    );
    println!("  Last access: {}", last_access.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Expire this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repos
        .urls
        .mark_expired(key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to expire mapping: {e}"))?;

    println!();
    println!("{}", "✅ Short URL expired".green().bold());
    println!();

    Ok(())
}
