//! Escaping and unescaping.
//!
//! - Regular-expression metacharacter escaping
//! - XML entity decoding

pub mod regexp;
pub mod xml;

pub use regexp::{escape_special_characters_of_reg_exp_in_a_string, is_reg_exp_special_character};
pub use xml::replace_escaped_xml_characters_with_non_escaped_characters;
