//! Access log selector.

use std::fmt;

/// One of the two independent, append-only access logs.
///
/// - `Short` receives an event for every successful short URL creation
/// - `Long` receives an event for every successful long URL resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLog {
    Short,
    Long,
}

impl AccessLog {
    pub const ALL: [AccessLog; 2] = [AccessLog::Short, AccessLog::Long];

    /// Name of the backing table in PostgreSQL.
    pub fn table(self) -> &'static str {
        match self {
            AccessLog::Short => "short_urls_access",
            AccessLog::Long => "long_urls_access",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLog::Short => "short",
            AccessLog::Long => "long",
        }
    }
}

impl fmt::Display for AccessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
