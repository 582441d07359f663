//! Whitespace classification and word tokenization.

/// Returns `true` for the characters matched by a JavaScript `\s`: the ASCII
/// controls TAB, LF, VT, FF and CR, the space separators, the line and
/// paragraph separators and the zero width no-break space (U+FEFF).
///
/// NEL (U+0085) is not whitespace here, unlike [`char::is_whitespace`].
pub fn is_whitespace_char(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Check whether a string contains whitespace only.
///
/// The empty string counts as whitespace only.
pub fn is_white_space_only(text: &str) -> bool {
    text.chars().all(is_whitespace_char)
}

/// Iterator over the whitespace-delimited words of a string.
///
/// Created by [`split_into_words`]. Yields borrowed slices and never yields an
/// empty word.
pub struct Words<'a> {
    inner: std::str::Split<'a, fn(char) -> bool>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.by_ref().find(|word| !word.is_empty())
    }
}

impl<'a> DoubleEndedIterator for Words<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.by_ref().rfind(|word| !word.is_empty())
    }
}

/// Split a string into its maximal runs of non-whitespace characters.
///
/// A blank string produces no words.
pub fn split_into_words(text: &str) -> Words<'_> {
    let separator: fn(char) -> bool = is_whitespace_char;
    Words {
        inner: text.split(separator),
    }
}

/// Count the whitespace-delimited words in a string.
pub fn count_words(text: &str) -> usize {
    split_into_words(text).count()
}
