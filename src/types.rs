//! Named operations, used to dispatch the helpers by name.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, StringHandlingError};
use crate::escape::{
    escape_special_characters_of_reg_exp_in_a_string,
    replace_escaped_xml_characters_with_non_escaped_characters,
};
use crate::text::{
    concat_list_and_separate_by_commas, concat_list_and_separate_by_symbol,
    contains_arabic_characters, get_first_and_last_word, get_first_word, includes, is_prefix,
    is_white_space_only, remove_file_name_extension,
};
use crate::url::{
    extract_path_from_url, get_https_version_of_url, replace_non_valid_url_chars_with_symbol,
    replace_special_characters_with_underscore,
};

/// Every string helper exposed by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `is_white_space_only(text)`
    IsWhiteSpaceOnly,
    /// `get_first_word(text)`
    FirstWord,
    /// `get_first_and_last_word(text)`
    FirstAndLastWord,
    /// `concat_list_and_separate_by_symbol(items, separator)`, separator first
    ConcatBySymbol,
    /// `concat_list_and_separate_by_commas(items)`
    ConcatByCommas,
    /// `escape_special_characters_of_reg_exp_in_a_string(text)`
    EscapeRegExp,
    /// `replace_escaped_xml_characters_with_non_escaped_characters(text)`
    UnescapeXml,
    /// `includes(items, value)`, value first
    Includes,
    /// `remove_file_name_extension(filename)`
    RemoveExtension,
    /// `is_prefix(text, prefix)`
    IsPrefix,
    /// `extract_path_from_url(url)`
    ExtractPath,
    /// `get_https_version_of_url(url)`
    HttpsVersion,
    /// `replace_special_characters_with_underscore(text)`
    ReplaceSpecialCharacters,
    /// `replace_non_valid_url_chars_with_symbol(text, symbol)`
    ReplaceNonValidUrlChars,
    /// `contains_arabic_characters(text)`
    ContainsArabic,
}

/// Number of arguments an [`Operation`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The operation takes exactly this many arguments
    Exactly(usize),
    /// The operation takes this many arguments or more (list operations)
    AtLeast(usize),
}

impl Arity {
    /// Check whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Result of running an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Operations returning a string
    Text(String),
    /// Operations returning a boolean
    Flag(bool),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl Operation {
    /// Every operation, in the order they are listed on the command line.
    pub const ALL: [Operation; 15] = [
        Operation::IsWhiteSpaceOnly,
        Operation::FirstWord,
        Operation::FirstAndLastWord,
        Operation::ConcatBySymbol,
        Operation::ConcatByCommas,
        Operation::EscapeRegExp,
        Operation::UnescapeXml,
        Operation::Includes,
        Operation::RemoveExtension,
        Operation::IsPrefix,
        Operation::ExtractPath,
        Operation::HttpsVersion,
        Operation::ReplaceSpecialCharacters,
        Operation::ReplaceNonValidUrlChars,
        Operation::ContainsArabic,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Operation::IsWhiteSpaceOnly => "is-white-space-only",
            Operation::FirstWord => "first-word",
            Operation::FirstAndLastWord => "first-and-last-word",
            Operation::ConcatBySymbol => "concat-by-symbol",
            Operation::ConcatByCommas => "concat-by-commas",
            Operation::EscapeRegExp => "escape-reg-exp",
            Operation::UnescapeXml => "unescape-xml",
            Operation::Includes => "includes",
            Operation::RemoveExtension => "remove-extension",
            Operation::IsPrefix => "is-prefix",
            Operation::ExtractPath => "extract-path",
            Operation::HttpsVersion => "https-version",
            Operation::ReplaceSpecialCharacters => "replace-special-characters",
            Operation::ReplaceNonValidUrlChars => "replace-non-valid-url-chars",
            Operation::ContainsArabic => "contains-arabic",
        }
    }

    /// Number of positional arguments [`Operation::run`] expects.
    pub fn arity(self) -> Arity {
        match self {
            Operation::ConcatBySymbol | Operation::Includes => Arity::AtLeast(1),
            Operation::ConcatByCommas => Arity::AtLeast(0),
            Operation::IsPrefix | Operation::ReplaceNonValidUrlChars => Arity::Exactly(2),
            _ => Arity::Exactly(1),
        }
    }

    /// Run the operation on positional arguments.
    ///
    /// List operations take their scalar argument (separator or searched
    /// value) first and the list elements after it.
    pub fn run<S: AsRef<str>>(self, args: &[S]) -> Result<Output> {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(StringHandlingError::ArgumentCount {
                operation: self.name(),
                expected: arity,
                actual: args.len(),
            });
        }
        debug!(operation = self.name(), args = args.len(), "running operation");

        let args: Vec<&str> = args.iter().map(<S as AsRef<str>>::as_ref).collect();
        let arg = |i: usize| args[i];
        let output = match self {
            Operation::IsWhiteSpaceOnly => Output::Flag(is_white_space_only(arg(0))),
            Operation::FirstWord => Output::Text(get_first_word(arg(0))),
            Operation::FirstAndLastWord => Output::Text(get_first_and_last_word(arg(0))),
            Operation::ConcatBySymbol => {
                Output::Text(concat_list_and_separate_by_symbol(&args[1..], arg(0)))
            }
            Operation::ConcatByCommas => Output::Text(concat_list_and_separate_by_commas(&args)),
            Operation::EscapeRegExp => {
                Output::Text(escape_special_characters_of_reg_exp_in_a_string(arg(0)))
            }
            Operation::UnescapeXml => Output::Text(
                replace_escaped_xml_characters_with_non_escaped_characters(arg(0)),
            ),
            Operation::Includes => Output::Flag(includes(&args[1..], arg(0))),
            Operation::RemoveExtension => Output::Text(remove_file_name_extension(arg(0))),
            Operation::IsPrefix => Output::Flag(is_prefix(arg(0), arg(1))),
            Operation::ExtractPath => Output::Text(extract_path_from_url(arg(0))),
            Operation::HttpsVersion => Output::Text(get_https_version_of_url(arg(0))),
            Operation::ReplaceSpecialCharacters => {
                Output::Text(replace_special_characters_with_underscore(arg(0)))
            }
            Operation::ReplaceNonValidUrlChars => {
                Output::Text(replace_non_valid_url_chars_with_symbol(arg(0), arg(1)))
            }
            Operation::ContainsArabic => Output::Flag(contains_arabic_characters(arg(0))),
        };

        Ok(output)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = StringHandlingError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| StringHandlingError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            "shout".parse::<Operation>(),
            Err(StringHandlingError::UnknownOperation("shout".to_string()))
        );
    }

    #[test]
    fn test_run_scalar_operations() {
        assert_eq!(
            Operation::FirstAndLastWord.run(&["  Ahmed Saleh Algamdi "]),
            Ok(Output::Text("Ahmed Algamdi".to_string()))
        );
        assert_eq!(
            Operation::IsPrefix.run(&["image/png", "image/"]),
            Ok(Output::Flag(true))
        );
        assert_eq!(
            Operation::HttpsVersion.run(&["http://github.com/"]).unwrap().to_string(),
            "https://github.com/"
        );
    }

    #[test]
    fn test_run_list_operations() {
        assert_eq!(
            Operation::ConcatBySymbol.run(&[" | ", "a", "b"]),
            Ok(Output::Text("a | b".to_string()))
        );
        assert_eq!(
            Operation::ConcatByCommas.run(&["Toyota", "GMC", "BMW"]),
            Ok(Output::Text("Toyota, GMC, BMW".to_string()))
        );
        assert_eq!(Operation::Includes.run(&["cat", "cat", "dog"]), Ok(Output::Flag(true)));
        assert_eq!(Operation::Includes.run(&["cat"]), Ok(Output::Flag(false)));

        let none: [&str; 0] = [];
        assert_eq!(Operation::ConcatByCommas.run(&none), Ok(Output::Text(String::new())));
    }

    #[test]
    fn test_run_rejects_wrong_argument_count() {
        assert_eq!(
            Operation::IsPrefix.run(&["only one"]),
            Err(StringHandlingError::ArgumentCount {
                operation: "is-prefix",
                expected: Arity::Exactly(2),
                actual: 1,
            })
        );

        let none: [&str; 0] = [];
        assert!(Operation::ConcatBySymbol.run(&none).is_err());
    }

    #[test]
    fn test_output_display() {
        assert_eq!(Output::Flag(false).to_string(), "false");
        assert_eq!(Output::Text("x".to_string()).to_string(), "x");
    }
}
