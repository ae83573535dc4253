//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use super::deadline::bounded;
use crate::domain::entities::{AccessLog, Statistics};
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `short_urls_access` and `long_urls_access`
/// tables.
///
/// The median is computed in SQL by numbering events in ascending order and
/// joining the row whose zero-based rank equals `count / 2`.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgAccessLogRepository {
    /// Creates a new repository; every call is bounded by `timeout`.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record(&self, log: AccessLog, at: DateTime<Utc>) -> Result<(), AppError> {
        // Table names come from a closed enum, never from input.
        let query = format!("INSERT INTO {} (access_at) VALUES ($1)", log.table());

        bounded(
            self.timeout,
            sqlx::query(&query).bind(at).execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }

    async fn statistics(&self, log: AccessLog) -> Result<Statistics, AppError> {
        let table = log.table();
        let query = format!(
            r#"
            SELECT c.count, r.access_at AS median
            FROM (SELECT COUNT(*) AS count FROM {table}) AS c
            LEFT JOIN (
                SELECT access_at, ROW_NUMBER() OVER (ORDER BY access_at) - 1 AS rank
                FROM {table}
            ) AS r ON r.rank = c.count / 2
            LIMIT 1
            "#
        );

        let (count, median) = bounded(
            self.timeout,
            sqlx::query_as::<_, (i64, Option<DateTime<Utc>>)>(&query)
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(Statistics::new(count, median))
    }
}
