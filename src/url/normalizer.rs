//! HTTP to HTTPS URL normalization.

use tracing::{debug, trace};
use url::Url;

use crate::error::StringHandlingError;
use crate::text::{is_prefix, is_white_space_only};

const HTTP: &str = "http";
const HTTPS: &str = "https";

/// Return the HTTPS version of a URL.
///
/// - A blank string yields an empty string.
/// - A URL that does not mention `http` (no protocol, or another protocol)
///   is returned as is.
/// - A URL already starting with `https` is returned as is.
/// - Otherwise the first `http` is rewritten to `https`.
///
/// # Examples
///
/// ```
/// use string_handling::get_https_version_of_url;
///
/// assert_eq!(get_https_version_of_url("http://github.com/"), "https://github.com/");
/// assert_eq!(get_https_version_of_url("https://github.com/"), "https://github.com/");
/// assert_eq!(get_https_version_of_url("github.com/"), "github.com/");
/// ```
pub fn get_https_version_of_url(url: &str) -> String {
    if is_white_space_only(url) {
        return String::new();
    }

    if !url.contains(HTTP) || is_prefix(url, HTTPS) {
        return url.to_string();
    }

    trace!(url, "rewriting http to https");
    url.replacen(HTTP, HTTPS, 1)
}

/// Normalize a URL to HTTPS and parse it.
///
/// Unlike [`get_https_version_of_url`] this rejects input that does not end up
/// as an absolute `https` URL with a host. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use string_handling::parse_https_url;
///
/// let url = parse_https_url("http://github.com/rust-lang?tab=repos")?;
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_str(), Some("github.com"));
/// assert_eq!(url.path(), "/rust-lang");
///
/// assert!(parse_https_url("ftp://files.example.com/").is_err());
/// # Ok::<(), string_handling::StringHandlingError>(())
/// ```
pub fn parse_https_url(url_str: &str) -> Result<Url, StringHandlingError> {
    if is_white_space_only(url_str) {
        return Err(StringHandlingError::MissingHost);
    }

    let normalized = get_https_version_of_url(url_str.trim());
    let url = Url::parse(&normalized)?;

    if url.scheme() != HTTPS {
        return Err(StringHandlingError::NotHttpUrl(url_str.to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {
            debug!(host, "parsed https url");
            Ok(url)
        }
        _ => Err(StringHandlingError::MissingHost),
    }
}
