//! Filename and prefix helpers.

use super::whitespace::is_white_space_only;

/// Strip the final extension from a filename.
///
/// Only the text after the last `.` is removed, so `"a.b.c"` becomes `"a.b"`.
/// A filename without a `.` is returned unchanged and a blank one yields an
/// empty string.
pub fn remove_file_name_extension(filename: &str) -> String {
    if is_white_space_only(filename) {
        return String::new();
    }

    match filename.rsplit_once('.') {
        Some((stem, _extension)) => stem.to_string(),
        None => filename.to_string(),
    }
}

/// Check whether `text` starts with `possible_prefix`.
///
/// The comparison is exact: case-sensitive and without trimming.
pub fn is_prefix(text: &str, possible_prefix: &str) -> bool {
    if text.len() < possible_prefix.len() {
        return false;
    }

    text.starts_with(possible_prefix)
}
