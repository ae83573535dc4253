//! In-memory implementation of the access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use crate::domain::entities::{AccessLog, Statistics};
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

/// In-process access logs, one vector per log.
#[derive(Debug, Default)]
pub struct MemoryAccessLogRepository {
    short: Mutex<Vec<DateTime<Utc>>>,
    long: Mutex<Vec<DateTime<Utc>>>,
}

impl MemoryAccessLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self, log: AccessLog) -> &Mutex<Vec<DateTime<Utc>>> {
        match log {
            AccessLog::Short => &self.short,
            AccessLog::Long => &self.long,
        }
    }
}

#[async_trait]
impl AccessLogRepository for MemoryAccessLogRepository {
    async fn record(&self, log: AccessLog, at: DateTime<Utc>) -> Result<(), AppError> {
        self.log(log)
            .lock()
            .map_err(|_| AppError::internal("access log mutex poisoned"))?
            .push(at);
        Ok(())
    }

    async fn statistics(&self, log: AccessLog) -> Result<Statistics, AppError> {
        let events = self
            .log(log)
            .lock()
            .map_err(|_| AppError::internal("access log mutex poisoned"))?;
        Ok(Statistics::from_timestamps(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_logs_are_independent() {
        let repo = MemoryAccessLogRepository::new();
        let t0 = Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap();

        repo.record(AccessLog::Short, t0).await.unwrap();
        for i in 0..4 {
            repo.record(AccessLog::Long, t0 + Duration::seconds(i))
                .await
                .unwrap();
        }

        let short = repo.statistics(AccessLog::Short).await.unwrap();
        let long = repo.statistics(AccessLog::Long).await.unwrap();

        assert_eq!(short, Statistics::new(1, Some(t0)));
        assert_eq!(long, Statistics::new(4, Some(t0 + Duration::seconds(2))));
    }

    #[tokio::test]
    async fn test_empty_log_has_no_median() {
        let repo = MemoryAccessLogRepository::new();
        let stats = repo.statistics(AccessLog::Long).await.unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.median.is_none());
    }
}
