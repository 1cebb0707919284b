//! Pipeline orchestrators.
//!
//! Every constrainer is a plain struct with one public field per stage, each
//! holding a default from [`crate::constraints`] with Java keywords and
//! PascalCase. Targets override single stages with the `with_*` builders; the
//! merge happens once, at construction, never per call.
//!
//! Key pipelines run, in this order:
//!
//! ```text
//! NO_SPECIAL_CHAR → NO_NUMBER_START_CHAR → NO_EMPTY_VALUE
//!   → NO_RESERVED_KEYWORDS → NAMING_FORMATTER → NO_DUPLICATE_KEYS
//! ```
//!
//! and hand back the formatted form of whatever the resolver settled on. If
//! formatting reintroduced a leading digit, an empty name or a keyword, those
//! stages are applied once more and duplicates resolved again.
pub mod enum_key;
pub mod enum_value;
pub mod model_name;
pub mod property_key;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::format_helpers::NamingConvention;

pub use enum_key::EnumKeyConstrainer;
pub use enum_value::EnumValueConstrainer;
pub use model_name::ModelNameConstrainer;
pub use property_key::PropertyKeyConstrainer;

/// A single `string -> string` pipeline stage.
pub type StringStage = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Target-language keyword check, injected rather than global.
pub type KeywordPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub(crate) fn default_keyword_predicate() -> KeywordPredicate {
    Arc::new(crate::java::is_reserved_java_keyword)
}

pub(crate) fn keyword_stage(is_reserved: KeywordPredicate) -> StringStage {
    Arc::new(move |value: &str| crate::constraints::no_reserved_keywords(value, &*is_reserved))
}

/// `NO_SPECIAL_CHAR` with a custom exclusion set and separator.
pub fn special_char_stage(exclude: Vec<char>, separator: impl Into<String>) -> StringStage {
    let separator = separator.into();
    Arc::new(move |value: &str| {
        crate::constraints::no_special_char_with(value, &exclude, &separator)
    })
}

// ————————————————————————————————————————————————————————————————————————————
// SHARED KEY PIPELINE
// ————————————————————————————————————————————————————————————————————————————

/// The stages property and enum key pipelines have in common; only the
/// duplicate resolver differs per kind.
pub(crate) struct KeyStages<'a> {
    pub no_special_char: &'a StringStage,
    pub no_number_start_char: &'a StringStage,
    pub no_empty_value: &'a StringStage,
    pub no_reserved_keywords: &'a StringStage,
    pub naming_formatter: &'a StringStage,
}

impl KeyStages<'_> {
    pub(crate) fn run<R>(&self, key: &str, resolve_duplicates: R) -> String
    where
        R: Fn(&str, &dyn Fn(&str) -> String) -> String,
    {
        let formatter = |value: &str| (self.naming_formatter)(value);

        let mut candidate = (self.no_special_char)(key);
        candidate = (self.no_number_start_char)(&candidate);
        candidate = (self.no_empty_value)(&candidate);
        candidate = (self.no_reserved_keywords)(&candidate);
        candidate = formatter(&candidate);
        let mut constrained = formatter(&resolve_duplicates(&candidate, &formatter));

        // formatting can undo earlier stages: `Class` -> `class` in camelCase,
        // `_1a` -> `1a` in snake_case
        let guarded = self.guard(&constrained);
        if guarded != constrained {
            debug!(key, formatted = %constrained, guarded = %guarded, "naming formatter undid an earlier stage");
            constrained = formatter(&resolve_duplicates(&formatter(&guarded), &formatter));
        }

        trace!(key, constrained = %constrained, "constrained key");
        constrained
    }

    fn guard(&self, value: &str) -> String {
        let value = (self.no_number_start_char)(value);
        let value = (self.no_empty_value)(&value);
        (self.no_reserved_keywords)(&value)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SET
// ————————————————————————————————————————————————————————————————————————————

/// Everything [`crate::lower`] needs to constrain a model of either kind.
#[derive(Debug, Clone, Default)]
pub struct ConstrainerSet {
    pub property_key: PropertyKeyConstrainer,
    pub enum_key: EnumKeyConstrainer,
    pub enum_value: EnumValueConstrainer,
    pub model_name: ModelNameConstrainer,
}

impl ConstrainerSet {
    pub fn with_property_naming(mut self, convention: NamingConvention) -> Self {
        self.property_key = self.property_key.with_naming_formatter(convention.formatter());
        self
    }
    pub fn with_enum_naming(mut self, convention: NamingConvention) -> Self {
        self.enum_key = self.enum_key.with_naming_formatter(convention.formatter());
        self
    }
    pub fn with_model_naming(mut self, convention: NamingConvention) -> Self {
        self.model_name = self.model_name.with_naming_formatter(convention.formatter());
        self
    }
    /// Swap the keyword table of every name pipeline at once.
    pub fn with_reserved_keywords<F>(mut self, is_reserved: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let is_reserved: KeywordPredicate = Arc::new(is_reserved);
        self.property_key.no_reserved_keywords = keyword_stage(is_reserved.clone());
        self.enum_key.no_reserved_keywords = keyword_stage(is_reserved.clone());
        self.model_name.no_reserved_keywords = keyword_stage(is_reserved);
        self
    }
}
