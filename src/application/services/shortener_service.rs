//! Short URL creation, resolution and usage statistics.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use url::Url;

use crate::domain::clock::Clock;
use crate::domain::entities::{AccessLog, NewUrlMapping, OverallStatistics};
use crate::domain::expiration::ExpirationPolicy;
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::{AppError, ErrorKind};
use crate::utils::key_deriver::derive_key;
use crate::utils::url_validator::{same_origin, validate_url};

/// Scheme, host and TTL the service issues short URLs under.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    base: Url,
    policy: ExpirationPolicy,
}

impl ShortenerSettings {
    /// Builds settings from the configured scheme, host (optionally with a
    /// port) and mapping lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadParams`] if scheme and host do not form a valid
    /// origin, or if `ttl` is negative.
    pub fn new(scheme: &str, host: &str, ttl: Duration) -> Result<Self, AppError> {
        if scheme.is_empty() || host.is_empty() {
            return Err(AppError::bad_params("scheme and host must not be empty"));
        }

        let base = Url::parse(&format!("{scheme}://{host}/"))
            .map_err(|e| AppError::bad_params_with("invalid scheme or host name", e))?;

        if base.host_str().is_none_or(str::is_empty) || base.path() != "/" {
            return Err(AppError::bad_params("invalid scheme or host name"));
        }

        if ttl < Duration::zero() {
            return Err(AppError::bad_params("url lifetime must not be negative"));
        }

        Ok(Self {
            base,
            policy: ExpirationPolicy::new(ttl),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn policy(&self) -> ExpirationPolicy {
        self.policy
    }

    fn short_url_for(&self, short_key: &str) -> String {
        let mut url = self.base.clone();
        url.set_path(short_key);
        url.into()
    }
}

/// Result of a successful shortening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_key: String,
    pub short_url: String,
    pub long_url: String,
}

/// Operations exposed to the HTTP façade and the admin CLI.
///
/// Lets [`crate::state::AppState`] hold the service behind a trait object
/// regardless of which storage backend it was built with.
#[async_trait]
pub trait UrlShortener: Send + Sync {
    /// Shortens `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadParams`] if the URL is invalid or the derived key
    /// collides with an existing one (the client should resubmit).
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_short_url(&self, long_url: &str) -> Result<ShortenedUrl, AppError>;

    /// Resolves a short URL back to its long URL, refreshing its last access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadParams`] if the URL is invalid or not issued by
    /// this service.
    /// Returns [`AppError::NotFound`] if the key is unknown or the mapping has
    /// expired.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_long_url(&self, short_url: &str) -> Result<String, AppError>;

    /// Returns statistics for both access logs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either aggregate cannot be fetched.
    async fn statistics(&self) -> Result<OverallStatistics, AppError>;
}

/// Service orchestrating validation, key derivation and expiration over the
/// storage repositories.
///
/// Holds no mutable state of its own; concurrent requests only meet in
/// storage. A resolve reads, checks and writes in separate calls, so racing
/// resolves of one key settle on last-write-wins.
pub struct ShortenerService<U: UrlRepository, A: AccessLogRepository> {
    url_repository: Arc<U>,
    access_log_repository: Arc<A>,
    settings: ShortenerSettings,
    clock: Arc<dyn Clock>,
}

impl<U: UrlRepository, A: AccessLogRepository> ShortenerService<U, A> {
    /// Creates a new shortener service.
    pub fn new(
        url_repository: Arc<U>,
        access_log_repository: Arc<A>,
        settings: ShortenerSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            url_repository,
            access_log_repository,
            settings,
            clock,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Appends an access event, logging and discarding any failure.
    async fn record_access(&self, log: AccessLog, at: DateTime<Utc>) {
        if let Err(e) = self.access_log_repository.record(log, at).await {
            tracing::warn!(error = %e, log = %log, "Failed to record access event");
        }
    }
}

#[async_trait]
impl<U: UrlRepository, A: AccessLogRepository> UrlShortener for ShortenerService<U, A> {
    async fn create_short_url(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        validate_url(long_url)?;

        let now = self.clock.now();
        let short_key = derive_key(long_url, now.timestamp());

        self.url_repository
            .save(NewUrlMapping {
                short_key: short_key.clone(),
                long_url: long_url.to_string(),
                created_at: now,
            })
            .await?;

        self.record_access(AccessLog::Short, now).await;

        tracing::debug!(short_key = %short_key, "Short URL created");

        Ok(ShortenedUrl {
            short_url: self.settings.short_url_for(&short_key),
            short_key,
            long_url: long_url.to_string(),
        })
    }

    async fn get_long_url(&self, short_url: &str) -> Result<String, AppError> {
        let parsed = validate_url(short_url)?;

        if !same_origin(&parsed, &self.settings.base) {
            return Err(AppError::bad_params("invalid scheme or host name"));
        }

        let short_key = parsed.path().trim_start_matches('/');
        let now = self.clock.now();

        let mapping = self
            .url_repository
            .find_active(short_key)
            .await?
            .ok_or_else(|| AppError::not_found("url not found"))?;

        if self.settings.policy.is_mapping_expired(&mapping, now) {
            tracing::info!(short_key = %short_key, "Short URL is expired");
            self.url_repository.mark_expired(short_key).await?;
            return Err(AppError::not_found("url not found"));
        }

        self.url_repository.touch(short_key, now).await?;

        self.record_access(AccessLog::Long, now).await;

        Ok(mapping.long_url)
    }

    async fn statistics(&self) -> Result<OverallStatistics, AppError> {
        let (short, long) = tokio::try_join!(
            self.access_log_repository.statistics(AccessLog::Short),
            self.access_log_repository.statistics(AccessLog::Long),
        )
        .map_err(|e| {
            if e.kind() == ErrorKind::Internal {
                e
            } else {
                AppError::internal_with("failed to fetch statistics", e)
            }
        })?;

        Ok(OverallStatistics { long, short })
    }
}
