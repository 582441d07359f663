//! Integration tests for the word, list, filename and escaping helpers.

use pretty_assertions::assert_eq;
use string_handling::{
    concat_list_and_separate_by_commas, concat_list_and_separate_by_symbol,
    contains_arabic_characters, count_words, escape_special_characters_of_reg_exp_in_a_string,
    get_first_and_last_word, get_first_word, includes, is_prefix, is_white_space_only,
    remove_file_name_extension, replace_escaped_xml_characters_with_non_escaped_characters,
    split_into_words,
};

#[test]
fn test_white_space_only() {
    assert!(!is_white_space_only("hello everybody!"));
    assert!(is_white_space_only("       "));
    assert!(is_white_space_only(""));
    assert!(is_white_space_only("\t\n\r \u{000B}\u{000C}"));
}

#[test]
fn test_word_extraction() {
    assert_eq!(get_first_word("   Ahmed    Saleh Algamdi"), "Ahmed");
    assert_eq!(get_first_word("   "), "");
    assert_eq!(get_first_and_last_word("   Ahmed    Saleh Aymen Raed Algamdi"), "Ahmed Algamdi");
    assert_eq!(get_first_and_last_word("   "), "");
    assert_eq!(get_first_and_last_word("Ahmed"), "Ahmed");
}

#[test]
fn test_words_of_arabic_names() {
    let name = "  أحمد   صالح الغامدي ";
    assert_eq!(get_first_word(name), "أحمد");
    assert_eq!(get_first_and_last_word(name), "أحمد الغامدي");
    assert_eq!(count_words(name), 3);
    assert!(contains_arabic_characters(name));
}

#[test]
fn test_first_word_matches_tokenizer() {
    let inputs = vec!["a b", "\tx\ny", "  lone  ", "one, two"];

    for input in inputs {
        assert_eq!(
            Some(get_first_word(input).as_str()),
            split_into_words(input).next(),
            "First word mismatch for: {:?}",
            input
        );
    }
}

#[test]
fn test_list_joining() {
    let cars = vec!["Toyota", "GMC", "BMW"];
    assert_eq!(concat_list_and_separate_by_symbol(&cars, ", "), "Toyota, GMC, BMW");
    assert_eq!(concat_list_and_separate_by_commas(&cars), "Toyota, GMC, BMW");

    let empty: Vec<String> = Vec::new();
    assert_eq!(concat_list_and_separate_by_symbol(&empty, ", "), "");
    assert_eq!(concat_list_and_separate_by_symbol(&["Toyota"], ", "), "Toyota");
}

#[test]
fn test_membership() {
    let animals = vec!["cat".to_string(), "dog".to_string()];
    assert!(includes(&animals, "cat"));
    assert!(!includes(&animals, "bird"));

    let empty: Vec<&str> = Vec::new();
    assert!(!includes(&empty, "cat"));
}

#[test]
fn test_reg_exp_escaping() {
    assert_eq!(
        escape_special_characters_of_reg_exp_in_a_string(".*+?^${}()\\ \\\\ '"),
        "\\.\\*\\+\\?\\^\\$\\{\\}\\(\\)\\\\ \\\\\\\\ '"
    );
}

#[test]
fn test_escaped_pattern_matches_literally() {
    let inputs = vec![".*+?^${}()|[]\\", "price: $5.00 (approx)", "a|b", "[draft] v1.2+"];

    for input in inputs {
        let pattern = format!("^{}$", escape_special_characters_of_reg_exp_in_a_string(input));
        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match(input), "Escaped pattern should match: {:?}", input);
    }
}

#[test]
fn test_xml_unescaping() {
    assert_eq!(
        replace_escaped_xml_characters_with_non_escaped_characters(
            "&quot; The ocean&apos;s blue &lt; &amp; &gt; &quot;"
        ),
        "\" The ocean's blue < & > \""
    );
    assert_eq!(replace_escaped_xml_characters_with_non_escaped_characters("      "), "      ");
}

#[test]
fn test_filename_extension() {
    assert_eq!(remove_file_name_extension("file.name-file.name.png"), "file.name-file.name");
    assert_eq!(remove_file_name_extension("filename-filename"), "filename-filename");
    assert_eq!(remove_file_name_extension("    "), "");
}

#[test]
fn test_prefix() {
    assert!(is_prefix("image/png", "image/"));
    assert!(!is_prefix("document/image/png", "image/"));
    assert!(is_prefix("https\\x\\x", "https"));
    assert!(!is_prefix("  http\\x\\x", "https"));
}
