//! Positional URL path extraction.
//!
//! This is not a URL grammar. The URL is split on `/` and the leading tokens
//! holding the scheme and authority are dropped by position, which is enough
//! for `scheme://host[:port]/path?query` and `host[:port]/path?query` inputs.

use tracing::trace;

use crate::text::is_white_space_only;

/// Tokens before the path when the URL carries `//`: `["https:", "", "host"]`.
const TOKENS_BEFORE_PATH_WITH_PROTOCOL: usize = 3;
/// Tokens before the path for a bare host: `["host"]`.
const TOKENS_BEFORE_PATH_WITHOUT_PROTOCOL: usize = 1;

/// Extract the path of a URL, with or without protocol, port and query.
///
/// The path is returned with a leading `/`. A URL without a path (including
/// one that ends in a lone `/`) or a blank string yields an empty string.
///
/// # Examples
///
/// ```
/// use string_handling::extract_path_from_url;
///
/// assert_eq!(
///     extract_path_from_url("https://hostname.com:8080/pathname/p1?q1=1"),
///     "/pathname/p1"
/// );
/// assert_eq!(extract_path_from_url("hostname.com/pathname"), "/pathname");
/// assert_eq!(extract_path_from_url("https://hostname.com/"), "");
/// ```
pub fn extract_path_from_url(url: &str) -> String {
    if is_white_space_only(url) {
        return String::new();
    }

    let has_protocol = url.contains("//");
    let tokens_before_path = if has_protocol {
        TOKENS_BEFORE_PATH_WITH_PROTOCOL
    } else {
        TOKENS_BEFORE_PATH_WITHOUT_PROTOCOL
    };
    trace!(has_protocol, tokens_before_path, "extracting URL path");

    let joined = url
        .split('/')
        .skip(tokens_before_path)
        .collect::<Vec<_>>()
        .join("/");

    // Everything from the first '?' on is the query string
    let path = match joined.split_once('?') {
        Some((path, _query)) => path,
        None => joined.as_str(),
    };

    if path.is_empty() {
        String::new()
    } else {
        format!("/{}", path)
    }
}
