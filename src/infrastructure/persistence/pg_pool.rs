//! PostgreSQL pool construction and schema migrations.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;

use crate::config::Config;

/// Pauses between connection attempts: 1s, 2s, 3s, ...
fn linear_backoff(retries: usize) -> impl Iterator<Item = Duration> {
    (1..=retries as u64).map(Duration::from_secs)
}

/// Opens the connection pool, retrying with linearly growing pauses.
///
/// Makes one attempt plus `db_connect_retries` retries before giving up.
///
/// # Errors
///
/// Returns an error if no database URL is configured or every attempt fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let mut attempt = 0u32;
    let pool = Retry::spawn(linear_backoff(config.db_connect_retries), || {
        attempt += 1;
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!(attempt, error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Applies pending migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
