//! Constraint primitives.
//!
//! Each one solves a single concern and is a total `&str -> String`. They are
//! order-sensitive when composed; see [`crate::constrainer`] for the order.
pub mod duplicates;

use crate::format_helpers::replace_special_characters;

pub use duplicates::{no_duplicate_enum_keys, no_duplicate_properties, MAX_DUPLICATE_DEPTH};

// ------------------------------- Literals --------------------------------- //

pub const NUMBER_PREFIX: &str = "number_";
pub const EMPTY_VALUE: &str = "empty";
pub const RESERVED_PREFIX: &str = "reserved_";

/// kept verbatim by [`no_special_char`]: the space is a word boundary for the
/// naming formatter, `_` is a legal identifier character
pub const DEFAULT_SPECIAL_CHAR_EXCLUDE: &[char] = &[' ', '_'];
pub const DEFAULT_SPECIAL_CHAR_SEPARATOR: &str = "_";

// ------------------------------ Primitives -------------------------------- //

/// Default special character handling.
///
/// Leading and trailing spaces carry no word boundary, so they are trimmed
/// first; a key made of spaces only then falls through to [`no_empty_value`].
pub fn no_special_char(value: &str) -> String {
    no_special_char_with(value, DEFAULT_SPECIAL_CHAR_EXCLUDE, DEFAULT_SPECIAL_CHAR_SEPARATOR)
}

pub fn no_special_char_with(value: &str, exclude: &[char], separator: &str) -> String {
    replace_special_characters(value.trim_matches(' '), exclude, separator)
}

pub fn no_number_start_char(value: &str) -> String {
    match value.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("{NUMBER_PREFIX}{value}"),
        _ => value.to_owned(),
    }
}

pub fn no_empty_value(value: &str) -> String {
    if value.is_empty() {
        EMPTY_VALUE.to_owned()
    } else {
        value.to_owned()
    }
}

pub fn no_reserved_keywords<F>(value: &str, is_reserved: F) -> String
where
    F: Fn(&str) -> bool,
{
    if is_reserved(value) {
        format!("{RESERVED_PREFIX}{value}")
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::is_reserved_java_keyword;

    #[test]
    fn special_chars() {
        assert_eq!(no_special_char("first-name"), "first_name");
        assert_eq!(no_special_char("first name"), "first name");
        assert_eq!(no_special_char("  padded "), "padded");
        assert_eq!(no_special_char("   "), "");
        assert_eq!(no_special_char("$ref"), "_ref");
        assert_eq!(no_special_char_with("a.b c", &[], ""), "abc");
    }

    #[test]
    fn number_start() {
        assert_eq!(no_number_start_char("1name"), "number_1name");
        assert_eq!(no_number_start_char("name1"), "name1");
        assert_eq!(no_number_start_char(""), "");
        assert_eq!(no_number_start_char(" 1"), " 1");
    }

    #[test]
    fn empty_value() {
        assert_eq!(no_empty_value(""), "empty");
        assert_eq!(no_empty_value("x"), "x");
    }

    #[test]
    fn reserved_keywords() {
        assert_eq!(no_reserved_keywords("class", is_reserved_java_keyword), "reserved_class");
        assert_eq!(no_reserved_keywords("Class", is_reserved_java_keyword), "Class");
        assert_eq!(no_reserved_keywords("anything", |_: &str| true), "reserved_anything");
    }
}
