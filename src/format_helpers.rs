//! String helpers shared by every constraint stage.
//!
//! Nothing in here knows about models. Every function is total: any input,
//! including the empty string, maps to some output.
use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase};
use serde::{Deserialize, Serialize};

// ————————————————————————————————————————————————————————————————————————————
// SPECIAL CHARACTERS
// ————————————————————————————————————————————————————————————————————————————

/// The allow-list: ASCII letters and digits.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Replace every character outside the allow-list with `separator`.
///
/// Characters in `exclude` are kept as-is so a later stage can still act on
/// them (a space survives so case conversion can treat it as a word boundary).
pub fn replace_special_characters(value: &str, exclude: &[char], separator: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if is_allowed_char(c) || exclude.contains(&c) {
            out.push(c);
        } else {
            out.push_str(separator);
        }
    }
    out
}

// ————————————————————————————————————————————————————————————————————————————
// CASE CONVENTIONS
// ————————————————————————————————————————————————————————————————————————————

/// Upper-case the first letter of every whitespace separated word and join
/// them. Underscores are legal identifier characters and are kept, so
/// `reserved_class` becomes `Reserved_class` and `first name` becomes
/// `FirstName`.
pub fn to_pascal_case(value: &str) -> String {
    value.split_whitespace().map(capitalize).collect()
}

// Camel, snake and constant case split words on every non-alphanumeric
// character, on lower→upper and on acronym boundaries (`HTTPServer`).

pub fn to_camel_case(value: &str) -> String {
    value.to_lower_camel_case()
}

pub fn to_snake_case(value: &str) -> String {
    value.to_snake_case()
}

pub fn to_constant_case(value: &str) -> String {
    value.to_shouty_snake_case()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Named case conventions a target can pick its formatter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    #[default]
    Pascal,
    Camel,
    Snake,
    Constant,
}

impl NamingConvention {
    pub fn formatter(self) -> fn(&str) -> String {
        match self {
            Self::Pascal => to_pascal_case,
            Self::Camel => to_camel_case,
            Self::Snake => to_snake_case,
            Self::Constant => to_constant_case,
        }
    }
    pub fn apply(self, value: &str) -> String {
        (self.formatter())(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_characters_use_separator_and_keep_excluded() {
        assert_eq!(replace_special_characters("first-name", &[], "_"), "first_name");
        assert_eq!(replace_special_characters("first name", &[' '], "_"), "first name");
        assert_eq!(replace_special_characters("a$b%c", &['$'], ""), "a$bc");
        assert_eq!(replace_special_characters("naïve", &[], "_"), "na_ve");
        assert_eq!(replace_special_characters("", &[' '], "_"), "");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("first name"), "FirstName");
        assert_eq!(to_pascal_case("reserved_class"), "Reserved_class");
        assert_eq!(to_pascal_case("number_1name"), "Number_1name");
        assert_eq!(to_pascal_case("  padded   words "), "PaddedWords");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("First name"), "firstName");
        assert_eq!(to_camel_case("Class"), "class");
        assert_eq!(to_camel_case("reserved_class"), "reservedClass");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
    }

    #[test]
    fn snake_and_constant_case() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("First Name"), "first_name");
        assert_eq!(to_snake_case("reserved_Value"), "reserved_value");
        assert_eq!(to_constant_case("ok"), "OK");
        assert_eq!(to_constant_case("reserved_OK"), "RESERVED_OK");
        assert_eq!(to_constant_case("httpStatus-code"), "HTTP_STATUS_CODE");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_constant_case("HTTPServer"), "HTTP_SERVER");
        assert_eq!(to_snake_case("number_1name"), "number_1name");
        assert_eq!(to_snake_case("_1a"), "1a");
    }

    #[test]
    fn conventions_are_idempotent() {
        let inputs = ["first name", "firstName", "reserved_Value", "number_1name", "HTTPServer", "_x", ""];
        for convention in [
            NamingConvention::Pascal,
            NamingConvention::Camel,
            NamingConvention::Snake,
            NamingConvention::Constant,
        ] {
            for input in inputs {
                let once = convention.apply(input);
                assert_eq!(convention.apply(&once), once, "{convention:?} on {input:?}");
            }
        }
    }
}
