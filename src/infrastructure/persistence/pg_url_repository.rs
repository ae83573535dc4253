//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use super::deadline::bounded;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StorageProbe, UrlRepository};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    short_url: String,
    origin: String,
    created_at: DateTime<Utc>,
    last_access: Option<DateTime<Utc>>,
    is_expired: bool,
}

impl From<UrlRow> for UrlMapping {
    fn from(r: UrlRow) -> Self {
        UrlMapping::new(r.short_url, r.origin, r.created_at, r.last_access, r.is_expired)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// The `urls.short_url` primary key enforces key uniqueness; a violation on
/// insert surfaces as [`AppError::BadParams`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgUrlRepository {
    /// Creates a new repository; every call is bounded by `timeout`.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Counts mappings by state, returned as `(active, expired)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_by_state(&self) -> Result<(i64, i64), AppError> {
        bounded(
            self.timeout,
            sqlx::query_as::<_, (i64, i64)>(
                r#"
                SELECT
                    COUNT(*) FILTER (WHERE is_expired = FALSE) AS active,
                    COUNT(*) FILTER (WHERE is_expired = TRUE) AS expired
                FROM urls
                "#,
            )
            .fetch_one(self.pool.as_ref()),
        )
        .await
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, mapping: NewUrlMapping) -> Result<(), AppError> {
        bounded(
            self.timeout,
            sqlx::query(
                r#"
                INSERT INTO urls (short_url, origin, created_at)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&mapping.short_key)
            .bind(&mapping.long_url)
            .bind(mapping.created_at)
            .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }

    async fn find_active(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = bounded(
            self.timeout,
            sqlx::query_as::<_, UrlRow>(
                r#"
                SELECT short_url, origin, created_at, last_access, is_expired
                FROM urls
                WHERE is_expired = FALSE AND short_url = $1
                "#,
            )
            .bind(short_key)
            .fetch_optional(self.pool.as_ref()),
        )
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn mark_expired(&self, short_key: &str) -> Result<(), AppError> {
        bounded(
            self.timeout,
            sqlx::query("UPDATE urls SET is_expired = TRUE WHERE short_url = $1")
                .bind(short_key)
                .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }

    async fn touch(&self, short_key: &str, at: DateTime<Utc>) -> Result<(), AppError> {
        bounded(
            self.timeout,
            sqlx::query("UPDATE urls SET last_access = $1 WHERE short_url = $2")
                .bind(at)
                .bind(short_key)
                .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StorageProbe for PgUrlRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), AppError> {
        bounded(
            self.timeout,
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
