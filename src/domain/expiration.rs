//! TTL-based expiration rule for URL mappings.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::UrlMapping;

/// Decides whether a mapping has gone stale.
///
/// The reference instant is the last access if the mapping was ever resolved,
/// otherwise its creation time. A mapping is expired when
/// `reference + ttl` is strictly before `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    ttl: Duration,
}

impl ExpirationPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_expired(
        &self,
        last_access: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> bool {
        let reference = last_access.unwrap_or(created_at);
        match reference.checked_add_signed(self.ttl) {
            Some(deadline) => deadline < now,
            // A deadline past the representable range never arrives.
            None => false,
        }
    }

    pub fn is_mapping_expired(&self, mapping: &UrlMapping, now: DateTime<Utc>) -> bool {
        self.is_expired(mapping.last_access, mapping.created_at, now)
    }
}
