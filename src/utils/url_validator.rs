//! URL validation for inbound long and short URLs.

use url::{ParseError, Url};

use crate::error::AppError;

/// Parses `input` and checks that both scheme and host are present.
///
/// # Errors
///
/// Returns [`AppError::BadParams`] with one of:
/// - `"invalid url format"` when the string cannot be parsed, has leading or
///   trailing whitespace, or contains ASCII control characters
/// - `"scheme can't be blank"` when there is no scheme
/// - `"host can't be blank"` when there is no host
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.org/a").is_ok());
/// assert!(validate_url("example.org/a").is_err());      // no scheme
/// assert!(validate_url("mailto:me@example.org").is_err()); // no host
/// assert!(validate_url("http://wrong:url:s").is_err());   // unparseable port
/// ```
pub fn validate_url(input: &str) -> Result<Url, AppError> {
    // The parser strips or encodes these silently.
    if input.trim() != input || input.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::bad_params("invalid url format"));
    }

    let url = Url::parse(input).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => AppError::bad_params_with("scheme can't be blank", e),
        ParseError::EmptyHost => AppError::bad_params_with("host can't be blank", e),
        other => AppError::bad_params_with("invalid url format", other),
    })?;

    if url.scheme().is_empty() {
        return Err(AppError::bad_params("scheme can't be blank"));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_params("host can't be blank"));
    }

    Ok(url)
}

/// Returns true when `url` points at the same scheme, host and port as `base`.
///
/// Default ports are taken into account, so `http://s.io:80/x` matches a base
/// of `http://s.io`.
pub fn same_origin(url: &Url, base: &Url) -> bool {
    url.scheme() == base.scheme()
        && url.host_str() == base.host_str()
        && url.port_or_known_default() == base.port_or_known_default()
}
