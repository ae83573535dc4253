//! Shared application state.

use std::sync::Arc;

use crate::application::services::{ShortenerService, ShortenerSettings, UrlShortener};
use crate::domain::clock::Clock;
use crate::domain::repositories::{AccessLogRepository, StorageProbe, UrlRepository};

/// State injected into every handler.
///
/// Both fields are trait objects so the same router serves the PostgreSQL
/// and in-memory backends.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<dyn UrlShortener>,
    pub storage: Arc<dyn StorageProbe>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn UrlShortener>, storage: Arc<dyn StorageProbe>) -> Self {
        Self { shortener, storage }
    }

    /// Wires a [`ShortenerService`] over one backend's repositories.
    ///
    /// The URL repository doubles as the storage probe.
    pub fn from_repositories<U, A>(
        urls: Arc<U>,
        access_logs: Arc<A>,
        settings: ShortenerSettings,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        U: UrlRepository + StorageProbe + 'static,
        A: AccessLogRepository + 'static,
    {
        let storage: Arc<dyn StorageProbe> = urls.clone();
        let shortener = ShortenerService::new(urls, access_logs, settings, clock);
        Self::new(Arc::new(shortener), storage)
    }
}
