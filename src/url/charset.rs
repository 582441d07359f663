//! Replacement of characters that are unsafe in URLs.

/// Returns `true` for the characters allowed in a URL:
/// `A-Z a-z 0-9 - . _ ~ : / ? # [ ] @ ! $ & ' ( ) * + , ; =`.
pub fn is_valid_url_character(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-'
                | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
        )
}

/// Returns `true` for characters that are never kept by
/// [`replace_special_characters_with_underscore`]: space, tab, newline and
/// `" ' < > & ! @ # $ % ^ * | ( ) , ? : { } [ ]`.
pub fn is_forbidden_character(c: char) -> bool {
    matches!(
        c,
        ' '
            | '\t'
            | '\n'
            | '"'
            | '\''
            | '<'
            | '>'
            | '&'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '*'
            | '|'
            | '('
            | ')'
            | ','
            | '?'
            | ':'
            | '{'
            | '}'
            | '['
            | ']'
    )
}

/// Replace each whitespace or forbidden character with one underscore.
///
/// Runs are not collapsed: `"a  b"` becomes `"a__b"`. Every other character,
/// including non-ASCII text, is kept.
pub fn replace_special_characters_with_underscore(text: &str) -> String {
    text.chars()
        .map(|c| if is_forbidden_character(c) { '_' } else { c })
        .collect()
}

/// Replace every character that is not valid in a URL with `symbol`.
///
/// `symbol` may be empty, in which case invalid characters are dropped.
pub fn replace_non_valid_url_chars_with_symbol(text: &str, symbol: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if is_valid_url_character(c) {
            result.push(c);
        } else {
            result.push_str(symbol);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_replacement() {
        assert_eq!(
            replace_special_characters_with_underscore("my file (1).png"),
            "my_file__1_.png"
        );
        assert_eq!(replace_special_characters_with_underscore("a  b"), "a__b");
        assert_eq!(replace_special_characters_with_underscore("tab\tnew\nline"), "tab_new_line");
        assert_eq!(
            replace_special_characters_with_underscore("\"'<>&!@#$%^*|(),?:{}[]"),
            "_".repeat(22)
        );
    }

    #[test]
    fn test_underscore_replacement_keeps_safe_characters() {
        let safe = "a-b.c_d~e/f+g;h=i";
        assert_eq!(replace_special_characters_with_underscore(safe), safe);
        assert_eq!(replace_special_characters_with_underscore("تقرير.pdf"), "تقرير.pdf");
        assert_eq!(replace_special_characters_with_underscore(""), "");
    }

    #[test]
    fn test_non_valid_url_chars() {
        assert_eq!(replace_non_valid_url_chars_with_symbol("my file.png", "-"), "my-file.png");
        assert_eq!(replace_non_valid_url_chars_with_symbol("100%", "%25"), "100%25");
        assert_eq!(replace_non_valid_url_chars_with_symbol("a<b>c", ""), "abc");
        assert_eq!(replace_non_valid_url_chars_with_symbol("é", "_"), "_");
    }

    #[test]
    fn test_non_valid_url_chars_keeps_allowed_set() {
        let allowed = "AZaz09-._~:/?#[]@!$&'()*+,;=";
        assert_eq!(replace_non_valid_url_chars_with_symbol(allowed, "_"), allowed);
        assert_eq!(replace_non_valid_url_chars_with_symbol("{}|^\"", "_"), "_____");
    }
}
