//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::OverallStatistics;

/// Timestamp layout used for median access times.
pub const TIMING_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregates for both operations.
///
/// ```json
/// {
///   "counts":  { "long": 3, "short": 2 },
///   "timings": { "long": "2020-11-10 12:00:05", "short": "" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatisticsResponse {
    pub counts: Counts,
    pub timings: Timings,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counts {
    pub long: i64,
    pub short: i64,
}

/// Median access instants in UTC; empty string when the log is empty.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timings {
    pub long: String,
    pub short: String,
}

fn format_timing(median: Option<DateTime<Utc>>) -> String {
    median
        .map(|t| t.format(TIMING_FORMAT).to_string())
        .unwrap_or_default()
}

impl From<OverallStatistics> for StatisticsResponse {
    fn from(stats: OverallStatistics) -> Self {
        Self {
            counts: Counts {
                long: stats.long.count,
                short: stats.short.count,
            },
            timings: Timings {
                long: format_timing(stats.long.median),
                short: format_timing(stats.short.median),
            },
        }
    }
}
