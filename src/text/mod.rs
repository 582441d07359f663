//! Plain text helpers.
//!
//! This module contains the word and list utilities:
//! - Whitespace detection and word tokenization
//! - First/last word extraction
//! - List joining and membership
//! - Filename extension stripping and prefix tests
//! - Arabic-script detection

pub mod arabic;
pub mod filename;
pub mod list;
pub mod whitespace;
pub mod words;

// Re-export main functionality
pub use arabic::{contains_arabic_characters, is_arabic_character};
pub use filename::{is_prefix, remove_file_name_extension};
pub use list::{concat_list_and_separate_by_commas, concat_list_and_separate_by_symbol, includes};
pub use whitespace::{count_words, is_white_space_only, is_whitespace_char, split_into_words, Words};
pub use words::{get_first_and_last_word, get_first_word};
