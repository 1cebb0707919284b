//! Java as a target: the reserved word table every default constrainer checks.
use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Keywords plus the literals `true`, `false` and `null`, which are just as
/// unusable as identifiers. `_` has been a keyword since Java 9.
pub const JAVA_RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

static JAVA_RESERVED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| JAVA_RESERVED_KEYWORDS.iter().copied().collect());

/// Java is case-sensitive, so `Class` is a perfectly good identifier.
pub fn is_reserved_java_keyword(value: &str) -> bool {
    JAVA_RESERVED.contains(value)
}
