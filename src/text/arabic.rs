//! Arabic-script detection.

/// Returns `true` if `c` belongs to one of the Arabic Unicode blocks:
///
/// - U+0600..U+06FF Arabic (letters, harakat, Arabic-Indic digits, `، ؛ ؟`)
/// - U+0750..U+077F Arabic Supplement
/// - U+08A0..U+08FF Arabic Extended-A
/// - U+FB50..U+FDFF Arabic Presentation Forms-A
/// - U+FE70..U+FEFC Arabic Presentation Forms-B
pub fn is_arabic_character(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFC}'
    )
}

/// Check whether a string contains at least one Arabic character.
pub fn contains_arabic_characters(text: &str) -> bool {
    text.chars().any(is_arabic_character)
}
