use std::fmt;
use std::sync::Arc;

use super::{default_keyword_predicate, keyword_stage, KeyStages, KeywordPredicate, StringStage};
use crate::constrained::ConstrainedObjectModel;
use crate::constraints;
use crate::format_helpers::to_pascal_case;
use crate::model::ObjectModel;

pub type PropertyDuplicateStage = Arc<
    dyn Fn(&ConstrainedObjectModel, &ObjectModel, &str, &dyn Fn(&str) -> String) -> String
        + Send
        + Sync,
>;

/// Turns a raw property name into a unique identifier within its object.
#[derive(Clone)]
pub struct PropertyKeyConstrainer {
    pub no_special_char: StringStage,
    pub no_number_start_char: StringStage,
    pub no_duplicate_properties: PropertyDuplicateStage,
    pub no_empty_value: StringStage,
    pub naming_formatter: StringStage,
    pub no_reserved_keywords: StringStage,
}

impl Default for PropertyKeyConstrainer {
    fn default() -> Self {
        Self {
            no_special_char: Arc::new(constraints::no_special_char),
            no_number_start_char: Arc::new(constraints::no_number_start_char),
            no_duplicate_properties: Arc::new(constraints::no_duplicate_properties),
            no_empty_value: Arc::new(constraints::no_empty_value),
            naming_formatter: Arc::new(to_pascal_case),
            no_reserved_keywords: keyword_stage(default_keyword_predicate()),
        }
    }
}

impl PropertyKeyConstrainer {
    /// Constrain `property_key`, one of the keys of `object_model`, against the
    /// keys already committed to `constrained_object_model`.
    ///
    /// Keys must be fed in the raw model's iteration order: whichever of two
    /// colliding keys comes first keeps the unprefixed name.
    pub fn constrain(
        &self,
        property_key: &str,
        constrained_object_model: &ConstrainedObjectModel,
        object_model: &ObjectModel,
    ) -> String {
        let stages = KeyStages {
            no_special_char: &self.no_special_char,
            no_number_start_char: &self.no_number_start_char,
            no_empty_value: &self.no_empty_value,
            no_reserved_keywords: &self.no_reserved_keywords,
            naming_formatter: &self.naming_formatter,
        };
        stages.run(property_key, |candidate, formatter| {
            (self.no_duplicate_properties)(constrained_object_model, object_model, candidate, formatter)
        })
    }

    pub fn with_no_special_char<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.no_special_char = Arc::new(stage);
        self
    }
    pub fn with_no_number_start_char<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.no_number_start_char = Arc::new(stage);
        self
    }
    pub fn with_no_duplicate_properties<F>(mut self, stage: F) -> Self
    where
        F: Fn(&ConstrainedObjectModel, &ObjectModel, &str, &dyn Fn(&str) -> String) -> String
            + Send
            + Sync
            + 'static,
    {
        self.no_duplicate_properties = Arc::new(stage);
        self
    }
    pub fn with_no_empty_value<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.no_empty_value = Arc::new(stage);
        self
    }
    pub fn with_naming_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.naming_formatter = Arc::new(formatter);
        self
    }
    pub fn with_no_reserved_keywords<F>(mut self, stage: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.no_reserved_keywords = Arc::new(stage);
        self
    }
    /// Keep the default keyword stage, checking against another table.
    pub fn with_reserved_keywords<F>(mut self, is_reserved: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let is_reserved: KeywordPredicate = Arc::new(is_reserved);
        self.no_reserved_keywords = keyword_stage(is_reserved);
        self
    }
}

impl fmt::Debug for PropertyKeyConstrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyKeyConstrainer").finish_non_exhaustive()
    }
}
