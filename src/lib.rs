//! string-handling - small, pure string and URL helpers
//!
//! Every function in this crate is stateless and side-effect free: it borrows
//! its input, allocates a fresh result and never fails. Blank input (empty or
//! whitespace-only) is answered with an empty string or `false`.
//!
//! # Quick Start
//!
//! ```
//! use string_handling::{
//!     get_first_and_last_word, concat_list_and_separate_by_symbol,
//!     escape_special_characters_of_reg_exp_in_a_string, extract_path_from_url,
//!     get_https_version_of_url, remove_file_name_extension,
//! };
//!
//! assert_eq!(get_first_and_last_word("  Ahmed Saleh Algamdi "), "Ahmed Algamdi");
//! let cars = ["Toyota", "GMC", "BMW"];
//! assert_eq!(concat_list_and_separate_by_symbol(&cars, ", "), "Toyota, GMC, BMW");
//! assert_eq!(escape_special_characters_of_reg_exp_in_a_string("a.b*"), "a\\.b\\*");
//! assert_eq!(remove_file_name_extension("archive.tar.gz"), "archive.tar");
//! assert_eq!(extract_path_from_url("https://host.com:80/p1/p2?q=1"), "/p1/p2");
//! assert_eq!(get_https_version_of_url("http://github.com/"), "https://github.com/");
//! ```
//!
//! # Modules
//!
//! | Module   | Contents |
//! |----------|----------|
//! | `text`   | whitespace, words, lists, filenames, prefixes, Arabic detection |
//! | `escape` | regex metacharacter escaping, XML entity decoding |
//! | `url`    | path extraction, HTTPS normalization, URL character replacement |
//!
//! # Error Handling
//!
//! The helpers above are total. Only [`parse_https_url`] and
//! [`Operation::run`] return `Result<T, StringHandlingError>`.

// Re-export text helpers
pub use crate::text::{
    concat_list_and_separate_by_commas, concat_list_and_separate_by_symbol,
    contains_arabic_characters, count_words, get_first_and_last_word, get_first_word, includes,
    is_arabic_character, is_prefix, is_white_space_only, is_whitespace_char,
    remove_file_name_extension, split_into_words, Words,
};

// Re-export escaping helpers
pub use crate::escape::{
    escape_special_characters_of_reg_exp_in_a_string, is_reg_exp_special_character,
    replace_escaped_xml_characters_with_non_escaped_characters,
};

// Re-export URL helpers
pub use crate::url::{
    extract_path_from_url, get_https_version_of_url, is_forbidden_character,
    is_valid_url_character, parse_https_url, replace_non_valid_url_chars_with_symbol,
    replace_special_characters_with_underscore,
};

// Re-export public types
pub use error::StringHandlingError;
pub use types::{Arity, Operation, Output};

// Module declarations
pub mod error;
pub mod escape;
pub mod text;
pub mod types;
pub mod url;
