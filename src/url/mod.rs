//! URL processing utilities.
//!
//! This module contains URL-related functionality:
//! - Positional path extraction
//! - HTTP to HTTPS normalization and strict HTTPS parsing
//! - Replacement of characters that are unsafe in URLs

pub mod charset;
pub mod normalizer;
pub mod path;

// Re-export main functionality
pub use charset::{
    is_forbidden_character, is_valid_url_character, replace_non_valid_url_chars_with_symbol,
    replace_special_characters_with_underscore,
};
pub use normalizer::{get_https_version_of_url, parse_https_url};
pub use path::extract_path_from_url;
