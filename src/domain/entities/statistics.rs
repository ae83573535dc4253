//! Statistics derived from access logs.

use chrono::{DateTime, Utc};

/// Count and median timestamp of one access log.
///
/// Not persisted; computed at query time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub count: i64,
    /// `None` when the log is empty.
    pub median: Option<DateTime<Utc>>,
}

impl Statistics {
    pub fn new(count: i64, median: Option<DateTime<Utc>>) -> Self {
        Self { count, median }
    }

    /// Aggregates a log of access timestamps.
    ///
    /// The median is the element at zero-indexed position `count / 2` of the
    /// ascending order, which picks the upper-middle element for even counts.
    /// An empty log yields `count = 0` and no median.
    pub fn from_timestamps(timestamps: &[DateTime<Utc>]) -> Self {
        if timestamps.is_empty() {
            return Self::default();
        }

        let mut sorted = timestamps.to_vec();
        sorted.sort_unstable();

        Self {
            count: sorted.len() as i64,
            median: Some(sorted[sorted.len() / 2]),
        }
    }
}

/// Statistics for both access logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverallStatistics {
    pub long: Statistics,
    pub short: Statistics,
}
