//! First/last word extraction.

use super::whitespace::{is_white_space_only, split_into_words};

/// Return the first word of a string, or an empty string if it is blank.
pub fn get_first_word(text: &str) -> String {
    if is_white_space_only(text) {
        return String::new();
    }

    split_into_words(text)
        .next()
        .map(str::to_string)
        .unwrap_or_default()
}

/// Return the first and last words of a string joined by a single space.
///
/// A single-word string yields that word alone and a blank string yields an
/// empty string.
pub fn get_first_and_last_word(text: &str) -> String {
    if is_white_space_only(text) {
        return String::new();
    }

    let mut words = split_into_words(text);
    let Some(first) = words.next() else {
        return String::new();
    };

    match words.next_back() {
        Some(last) => format!("{} {}", first, last),
        None => first.to_string(),
    }
}
