use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use simple_url_shortener::domain::entities::NewUrlMapping;
use simple_url_shortener::domain::repositories::{StorageProbe, UrlRepository};
use simple_url_shortener::error::ErrorKind;
use simple_url_shortener::infrastructure::persistence::PgUrlRepository;

fn repo(pool: PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool), std::time::Duration::from_secs(5))
}

fn new_mapping(key: &str) -> NewUrlMapping {
    NewUrlMapping {
        short_key: key.to_string(),
        long_url: "https://example.org/a".to_string(),
        created_at: Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap(),
    }
}

#[sqlx::test]
async fn test_save_and_find_active(pool: PgPool) {
    let repo = repo(pool);
    repo.save(new_mapping("0123456789ab")).await.unwrap();

    let found = repo.find_active("0123456789ab").await.unwrap().unwrap();
    assert_eq!(found.long_url, "https://example.org/a");
    assert_eq!(found.created_at, Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap());
    assert!(found.last_access.is_none());
    assert!(!found.is_expired);
}

#[sqlx::test]
async fn test_find_active_unknown_key(pool: PgPool) {
    let repo = repo(pool);
    assert!(repo.find_active("ffffffffffff").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_key_is_bad_params(pool: PgPool) {
    let repo = repo(pool);
    repo.save(new_mapping("0123456789ab")).await.unwrap();

    let err = repo.save(new_mapping("0123456789ab")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadParams);
}

#[sqlx::test]
async fn test_mark_expired_hides_mapping(pool: PgPool) {
    let repo = repo(pool);
    repo.save(new_mapping("0123456789ab")).await.unwrap();
    repo.mark_expired("0123456789ab").await.unwrap();

    assert!(repo.find_active("0123456789ab").await.unwrap().is_none());
    assert_eq!(repo.count_by_state().await.unwrap(), (0, 1));
}

#[sqlx::test]
async fn test_touch_sets_last_access(pool: PgPool) {
    let repo = repo(pool);
    repo.save(new_mapping("0123456789ab")).await.unwrap();

    let at = Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap() + Duration::minutes(3);
    repo.touch("0123456789ab", at).await.unwrap();

    let found = repo.find_active("0123456789ab").await.unwrap().unwrap();
    assert_eq!(found.last_access, Some(at));
}

#[sqlx::test]
async fn test_count_by_state_and_ping(pool: PgPool) {
    let repo = repo(pool);
    repo.save(new_mapping("000000000001")).await.unwrap();
    repo.save(new_mapping("000000000002")).await.unwrap();
    repo.mark_expired("000000000002").await.unwrap();

    assert_eq!(repo.count_by_state().await.unwrap(), (1, 1));
    assert!(repo.ping().await.is_ok());
    assert_eq!(repo.backend(), "postgres");
}
