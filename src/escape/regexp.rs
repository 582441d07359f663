//! Regular-expression metacharacter escaping.

/// Returns `true` for characters that carry special meaning in a regular
/// expression: `. * + ? ^ $ { } ( ) | [ ] \`.
pub fn is_reg_exp_special_character(c: char) -> bool {
    matches!(
        c,
        '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
    )
}

/// Escape every regular-expression metacharacter in `s` with a backslash so
/// the result matches `s` literally when compiled as a pattern.
///
/// All other characters, including spaces and quotes, pass through unchanged.
pub fn escape_special_characters_of_reg_exp_in_a_string(s: &str) -> String {
    let extra = s.chars().filter(|&c| is_reg_exp_special_character(c)).count();
    let mut escaped = String::with_capacity(s.len() + extra);

    for c in s.chars() {
        if is_reg_exp_special_character(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
