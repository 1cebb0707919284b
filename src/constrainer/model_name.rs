use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{default_keyword_predicate, keyword_stage, KeywordPredicate, StringStage};
use crate::constraints;
use crate::format_helpers::to_pascal_case;

/// Type names for objects and enums. No duplicate stage: type names are not
/// scoped to a sibling set here.
#[derive(Clone)]
pub struct ModelNameConstrainer {
    pub no_special_char: StringStage,
    pub no_number_start_char: StringStage,
    pub no_empty_value: StringStage,
    pub naming_formatter: StringStage,
    pub no_reserved_keywords: StringStage,
}

impl Default for ModelNameConstrainer {
    fn default() -> Self {
        Self {
            no_special_char: Arc::new(constraints::no_special_char),
            no_number_start_char: Arc::new(constraints::no_number_start_char),
            no_empty_value: Arc::new(constraints::no_empty_value),
            naming_formatter: Arc::new(to_pascal_case),
            no_reserved_keywords: keyword_stage(default_keyword_predicate()),
        }
    }
}

impl ModelNameConstrainer {
    pub fn constrain(&self, model_name: &str) -> String {
        let mut name = (self.no_special_char)(model_name);
        name = (self.no_number_start_char)(&name);
        name = (self.no_empty_value)(&name);
        name = (self.no_reserved_keywords)(&name);
        name = (self.naming_formatter)(&name);
        let guarded = (self.no_number_start_char)(&name);
        let guarded = (self.no_empty_value)(&guarded);
        let guarded = (self.no_reserved_keywords)(&guarded);
        if guarded != name {
            name = (self.naming_formatter)(&guarded);
        }
        trace!(model_name, constrained = %name, "constrained model name");
        name
    }

    pub fn with_naming_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.naming_formatter = Arc::new(formatter);
        self
    }
    pub fn with_reserved_keywords<F>(mut self, is_reserved: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let is_reserved: KeywordPredicate = Arc::new(is_reserved);
        self.no_reserved_keywords = keyword_stage(is_reserved);
        self
    }
}

impl fmt::Debug for ModelNameConstrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelNameConstrainer").finish_non_exhaustive()
    }
}
