//! XML entity decoding.

/// Predefined XML entities in the order they are decoded.
///
/// `&amp;` is decoded after `&lt;` so `"&amp;lt;"` stays `"&lt;"`, but before
/// `&gt;` so `"&amp;gt;"` becomes `">"`.
const XML_ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&amp;", "&"),
    ("&gt;", ">"),
];

/// Replace every escaped XML character (`&quot;`, `&apos;`, `&lt;`, `&amp;`,
/// `&gt;`) with the character it stands for.
///
/// Text without entities is returned unchanged.
pub fn replace_escaped_xml_characters_with_non_escaped_characters(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    XML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, &(entity, decoded)| acc.replace(entity, decoded))
}
