//! Joining and searching string lists.

const COMMA_THEN_SPACE: &str = ", ";

/// Join a list of strings, placing `separator` between consecutive elements.
///
/// An empty list yields an empty string and a single element is returned as is.
pub fn concat_list_and_separate_by_symbol<S: AsRef<str>>(list: &[S], separator: &str) -> String {
    let mut result = String::new();

    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(item.as_ref());
    }

    result
}

/// Join a list of strings in the form `"string1, string2, ..., stringN"`.
pub fn concat_list_and_separate_by_commas<S: AsRef<str>>(list: &[S]) -> String {
    concat_list_and_separate_by_symbol(list, COMMA_THEN_SPACE)
}

/// Check whether `value` is exactly equal to any element of `list`.
pub fn includes<S: AsRef<str>>(list: &[S], value: &str) -> bool {
    list.iter().any(|item| item.as_ref() == value)
}
