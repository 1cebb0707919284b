use std::fmt;
use std::sync::Arc;

use super::{default_keyword_predicate, keyword_stage, KeyStages, KeywordPredicate, StringStage};
use crate::constrained::ConstrainedEnumModel;
use crate::constraints;
use crate::format_helpers::to_pascal_case;
use crate::model::EnumModel;

pub type EnumDuplicateStage = Arc<
    dyn Fn(&ConstrainedEnumModel, &EnumModel, &str, &dyn Fn(&str) -> String) -> String
        + Send
        + Sync,
>;

/// Turns an enum label into a unique identifier within its enum. Same
/// pipeline as [`super::PropertyKeyConstrainer`], resolving against
/// `values[].key`.
#[derive(Clone)]
pub struct EnumKeyConstrainer {
    pub no_special_char: StringStage,
    pub no_number_start_char: StringStage,
    pub no_duplicate_keys: EnumDuplicateStage,
    pub no_empty_value: StringStage,
    pub naming_formatter: StringStage,
    pub no_reserved_keywords: StringStage,
}

impl Default for EnumKeyConstrainer {
    fn default() -> Self {
        Self {
            no_special_char: Arc::new(constraints::no_special_char),
            no_number_start_char: Arc::new(constraints::no_number_start_char),
            no_duplicate_keys: Arc::new(constraints::no_duplicate_enum_keys),
            no_empty_value: Arc::new(constraints::no_empty_value),
            naming_formatter: Arc::new(to_pascal_case),
            no_reserved_keywords: keyword_stage(default_keyword_predicate()),
        }
    }
}

impl EnumKeyConstrainer {
    pub fn constrain(
        &self,
        enum_key: &str,
        constrained_enum_model: &ConstrainedEnumModel,
        enum_model: &EnumModel,
    ) -> String {
        let stages = KeyStages {
            no_special_char: &self.no_special_char,
            no_number_start_char: &self.no_number_start_char,
            no_empty_value: &self.no_empty_value,
            no_reserved_keywords: &self.no_reserved_keywords,
            naming_formatter: &self.naming_formatter,
        };
        stages.run(enum_key, |candidate, formatter| {
            (self.no_duplicate_keys)(constrained_enum_model, enum_model, candidate, formatter)
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
    pub fn with_no_duplicate_keys<F>(mut self, stage: F) -> Self
    where
        F: Fn(&ConstrainedEnumModel, &EnumModel, &str, &dyn Fn(&str) -> String) -> String
            + Send
            + Sync
            + 'static,
    {
        self.no_duplicate_keys = Arc::new(stage);
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
    pub fn with_reserved_keywords<F>(mut self, is_reserved: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let is_reserved: KeywordPredicate = Arc::new(is_reserved);
        self.no_reserved_keywords = keyword_stage(is_reserved);
        self
    }
}

impl fmt::Debug for EnumKeyConstrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumKeyConstrainer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_helpers::to_constant_case;

    fn keys(constrainer: &EnumKeyConstrainer, raw: &EnumModel) -> Vec<String> {
        let mut constrained = ConstrainedEnumModel::new(raw.name.clone(), raw.name.clone());
        for value in &raw.values {
            let key = constrainer.constrain(&value.key, &constrained, raw);
            constrained.values.push(crate::constrained::ConstrainedEnumValueModel {
                key,
                original_key: value.key.clone(),
                value: String::new(),
                raw_value: value.value.clone(),
            });
        }
        constrained.values.into_iter().map(|v| v.key).collect()
    }

    #[test]
    fn ok_and_ok() {
        let raw = EnumModel::new("status").with_keys(["ok", "Ok"]);
        assert_eq!(keys(&EnumKeyConstrainer::default(), &raw), ["Ok", "Reserved_Ok"]);
    }

    #[test]
    fn literally_identical_labels_stay_distinct() {
        let raw = EnumModel::new("status").with_keys(["ok", "ok", "ok"]);
        assert_eq!(
            keys(&EnumKeyConstrainer::default(), &raw),
            ["Ok", "Reserved_Ok", "Reserved_reserved_Ok"]
        );
    }

    #[test]
    fn constant_case_labels() {
        let constrainer = EnumKeyConstrainer::default().with_naming_formatter(to_constant_case);
        let raw = EnumModel::new("status").with_keys(["in progress", "In-Progress", "2xx", "null"]);
        assert_eq!(
            keys(&constrainer, &raw),
            ["IN_PROGRESS", "RESERVED_IN_PROGRESS", "NUMBER_2XX", "RESERVED_NULL"]
        );
    }
}
