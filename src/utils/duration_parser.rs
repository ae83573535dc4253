//! Parsing of human-friendly durations used in configuration.
//!
//! Accepted forms:
//! - bare seconds: `90`
//! - single unit: `30s`, `5m`, `24h`, `7d`, `250ms`
//! - combined units: `1h30m`, `2d12h`

use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,

    #[error("invalid number in duration '{0}'")]
    InvalidNumber(String),

    #[error("missing unit after '{0}'")]
    MissingUnit(u64),

    #[error("unsupported duration unit '{0}'")]
    UnsupportedUnit(String),

    #[error("duration '{0}' is out of range")]
    Overflow(String),
}

/// Parses `input` into a [`Duration`].
///
/// # Errors
///
/// See [`DurationParseError`] for the possible failures.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }

    if let Ok(secs) = input.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(DurationParseError::InvalidNumber(input.to_string()));
        }

        let value: u64 = rest[..digits_end]
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(input.to_string()))?;
        rest = &rest[digits_end..];

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(DurationParseError::MissingUnit(value));
        }
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];

        let part = match unit {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => value
                .checked_mul(60)
                .map(Duration::from_secs)
                .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?,
            "h" => value
                .checked_mul(3_600)
                .map(Duration::from_secs)
                .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?,
            "d" => value
                .checked_mul(86_400)
                .map(Duration::from_secs)
                .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?,
            other => return Err(DurationParseError::UnsupportedUnit(other.to_string())),
        };

        total = total
            .checked_add(part)
            .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
    }

    Ok(total)
}
