use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub type ValueStage = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Renders a raw enum value as a target-language literal.
#[derive(Clone)]
pub struct EnumValueConstrainer {
    pub literal: ValueStage,
}

impl Default for EnumValueConstrainer {
    fn default() -> Self {
        Self { literal: Arc::new(java_literal) }
    }
}

impl EnumValueConstrainer {
    pub fn constrain(&self, value: &Value) -> String {
        (self.literal)(value)
    }
    pub fn with_literal<F>(mut self, literal: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.literal = Arc::new(literal);
        self
    }
}

impl fmt::Debug for EnumValueConstrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumValueConstrainer").finish_non_exhaustive()
    }
}

/// Strings are quoted, numbers and booleans verbatim, composites become the
/// quoted JSON text.
///
/// Integers outside `int` get the `L` suffix; integers outside `long` have no
/// Java literal and are quoted like composites.
pub fn java_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) if i32::try_from(i).is_ok() => i.to_string(),
            Some(i) => format!("{i}L"),
            None if n.is_u64() => quote(&n.to_string()),
            None => n.to_string(),
        },
        Value::String(s) => quote(s),
        Value::Array(_) | Value::Object(_) => quote(&value.to_string()),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
