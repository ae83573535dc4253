//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short key to the original long URL.
///
/// Mappings are never physically deleted: staleness is recorded by setting
/// `is_expired`, after which the mapping is invisible to lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_key: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub last_access: Option<DateTime<Utc>>,
    pub is_expired: bool,
}

impl UrlMapping {
    pub fn new(
        short_key: String,
        long_url: String,
        created_at: DateTime<Utc>,
        last_access: Option<DateTime<Utc>>,
        is_expired: bool,
    ) -> Self {
        Self {
            short_key,
            long_url,
            created_at,
            last_access,
            is_expired,
        }
    }

    /// Instant from which the TTL is measured: last access, or creation if
    /// the mapping was never resolved.
    pub fn reference_instant(&self) -> DateTime<Utc> {
        self.last_access.unwrap_or(self.created_at)
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_key: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewUrlMapping> for UrlMapping {
    fn from(new: NewUrlMapping) -> Self {
        UrlMapping::new(new.short_key, new.long_url, new.created_at, None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_new_mapping_is_active_and_never_accessed() {
        let created_at = Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap();
        let mapping: UrlMapping = NewUrlMapping {
            short_key: "0123456789ab".to_string(),
            long_url: "https://example.org/a".to_string(),
            created_at,
        }
        .into();

        assert!(!mapping.is_expired);
        assert!(mapping.last_access.is_none());
        assert_eq!(mapping.reference_instant(), created_at);
    }

    #[test]
    fn test_reference_instant_prefers_last_access() {
        let created_at = Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap();
        let last_access = created_at + Duration::hours(3);
        let mapping = UrlMapping::new(
            "0123456789ab".to_string(),
            "https://example.org/a".to_string(),
            created_at,
            Some(last_access),
            false,
        );

        assert_eq!(mapping.reference_instant(), last_access);
    }
}
