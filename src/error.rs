//! Error types for the fallible helpers.
//!
//! The core string operations are total and never return an error. Only the
//! strict URL parser and the operation dispatcher can fail.

use thiserror::Error;

use crate::types::Arity;

/// Errors raised by [`parse_https_url`](crate::parse_https_url) and
/// [`Operation`](crate::Operation) dispatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StringHandlingError {
    /// The input was blank or parsed into a URL without a host.
    #[error("URL has no host")]
    MissingHost,

    /// The URL uses a scheme other than http or https.
    #[error("Not an http(s) URL: {0}")]
    NotHttpUrl(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// No operation is registered under the given name.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation was called with the wrong number of arguments.
    #[error("Operation '{operation}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        operation: &'static str,
        expected: Arity,
        actual: usize,
    },
}

impl From<url::ParseError> for StringHandlingError {
    fn from(err: url::ParseError) -> Self {
        StringHandlingError::UrlParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StringHandlingError>;
