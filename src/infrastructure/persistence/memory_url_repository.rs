//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StorageProbe, UrlRepository};
use crate::error::AppError;

/// In-process URL repository backed by a mutex-guarded map.
///
/// State is lost on restart. Tombstoned mappings stay in the map, so their
/// keys remain taken exactly as with the PostgreSQL primary key.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    inner: Mutex<HashMap<String, UrlMapping>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of a mapping regardless of its state.
    pub fn get(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.lock()?.get(short_key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, UrlMapping>>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("url store mutex poisoned"))
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save(&self, mapping: NewUrlMapping) -> Result<(), AppError> {
        let mut map = self.lock()?;
        if map.contains_key(&mapping.short_key) {
            return Err(AppError::bad_params("short url already taken, please retry"));
        }
        map.insert(mapping.short_key.clone(), mapping.into());
        Ok(())
    }

    async fn find_active(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self
            .lock()?
            .get(short_key)
            .filter(|m| !m.is_expired)
            .cloned())
    }

    async fn mark_expired(&self, short_key: &str) -> Result<(), AppError> {
        if let Some(mapping) = self.lock()?.get_mut(short_key) {
            mapping.is_expired = true;
        }
        Ok(())
    }

    async fn touch(&self, short_key: &str, at: DateTime<Utc>) -> Result<(), AppError> {
        if let Some(mapping) = self.lock()?.get_mut(short_key) {
            mapping.last_access = Some(at);
        }
        Ok(())
    }
}

#[async_trait]
impl StorageProbe for MemoryUrlRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    fn new_mapping(key: &str) -> NewUrlMapping {
        NewUrlMapping {
            short_key: key.to_string(),
            long_url: "https://example.org/a".to_string(),
            created_at: Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MemoryUrlRepository::new();
        repo.save(new_mapping("0123456789ab")).await.unwrap();

        let found = repo.find_active("0123456789ab").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.org/a");
        assert!(found.last_access.is_none());
        assert!(repo.find_active("ffffffffffff").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_key_is_bad_params() {
        let repo = MemoryUrlRepository::new();
        repo.save(new_mapping("0123456789ab")).await.unwrap();

        let err = repo.save(new_mapping("0123456789ab")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadParams);
    }

    #[tokio::test]
    async fn test_expired_mapping_is_hidden_but_kept() {
        let repo = MemoryUrlRepository::new();
        repo.save(new_mapping("0123456789ab")).await.unwrap();
        repo.mark_expired("0123456789ab").await.unwrap();

        assert!(repo.find_active("0123456789ab").await.unwrap().is_none());
        assert!(repo.get("0123456789ab").unwrap().unwrap().is_expired);
        assert!(repo.save(new_mapping("0123456789ab")).await.is_err());
    }

    #[tokio::test]
    async fn test_touch_updates_last_access() {
        let repo = MemoryUrlRepository::new();
        repo.save(new_mapping("0123456789ab")).await.unwrap();

        let at = Utc.with_ymd_and_hms(2020, 11, 11, 8, 30, 0).unwrap();
        repo.touch("0123456789ab", at).await.unwrap();

        let found = repo.find_active("0123456789ab").await.unwrap().unwrap();
        assert_eq!(found.last_access, Some(at));
    }

    #[tokio::test]
    async fn test_updates_on_unknown_key_are_noops() {
        let repo = MemoryUrlRepository::new();
        assert!(repo.mark_expired("missing").await.is_ok());
        assert!(repo.touch("missing", Utc::now()).await.is_ok());
        assert!(repo.ping().await.is_ok());
    }
}
