//! Constrained models: the raw models with every name made safe for one
//! target language. Built key by key by [`crate::lower`], read-only after.
//!
//! Keys are pairwise distinct within a model, non-empty, never start with a
//! digit and are never a reserved keyword of the target.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConstrainedModel {
    Object(ConstrainedObjectModel),
    Enum(ConstrainedEnumModel),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConstrainedObjectModel {
    pub name: String,
    pub original_name: String,
    /// keyed by the constrained property name
    pub properties: IndexMap<String, ConstrainedPropertyModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstrainedPropertyModel {
    pub property_name: String,
    pub original_name: String,
    pub required: bool,
    pub schema: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConstrainedEnumModel {
    pub name: String,
    pub original_name: String,
    pub values: Vec<ConstrainedEnumValueModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstrainedEnumValueModel {
    pub key: String,
    pub original_key: String,
    /// target-language literal for the value
    pub value: String,
    pub raw_value: Value,
}

/// One name the pipeline had to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename<'a> {
    pub original: &'a str,
    pub constrained: &'a str,
}

impl ConstrainedModel {
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object) => &object.name,
            Self::Enum(enum_) => &enum_.name,
        }
    }

    /// Keys in model order, as the emitter will print them.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Object(object) => object.properties.keys().map(String::as_str).collect(),
            Self::Enum(enum_) => enum_.values.iter().map(|v| v.key.as_str()).collect(),
        }
    }

    /// Model name and keys whose constrained form differs from the original.
    pub fn renames(&self) -> Vec<Rename<'_>> {
        let (name, original_name, pairs): (&str, &str, Vec<(&str, &str)>) = match self {
            Self::Object(object) => (
                object.name.as_str(),
                object.original_name.as_str(),
                object
                    .properties
                    .values()
                    .map(|p| (p.original_name.as_str(), p.property_name.as_str()))
                    .collect(),
            ),
            Self::Enum(enum_) => (
                enum_.name.as_str(),
                enum_.original_name.as_str(),
                enum_
                    .values
                    .iter()
                    .map(|v| (v.original_key.as_str(), v.key.as_str()))
                    .collect(),
            ),
        };
        std::iter::once((original_name, name))
            .chain(pairs)
            .filter(|(original, constrained)| original != constrained)
            .map(|(original, constrained)| Rename { original, constrained })
            .collect()
    }
}

impl ConstrainedObjectModel {
    pub fn new(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
            properties: IndexMap::new(),
        }
    }
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

impl ConstrainedEnumModel {
    pub fn new(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
            values: Vec::new(),
        }
    }
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|v| v.key == key)
    }
}
