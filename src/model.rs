//! Raw, language-agnostic models as handed over by a schema parser.
//!
//! Names in here are whatever the source schema used. Nothing guarantees they
//! are identifiers in any language; that is the job of [`crate::lower`].
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawModel {
    Object(ObjectModel),
    Enum(EnumModel),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectModel {
    pub name: String,
    /// iteration order is load-bearing: it decides which of two colliding
    /// names keeps the unprefixed form
    #[serde(default)]
    pub properties: IndexMap<String, PropertyModel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyModel {
    #[serde(default)]
    pub required: bool,
    /// Everything else the parser attached to the property. Carried through
    /// untouched for the emitter.
    #[serde(flatten)]
    pub schema: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumModel {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValueModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueModel {
    /// human readable label, not yet an identifier
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

// ————————————————————————————————————————————————————————————————————————————
// BUILDERS
// ————————————————————————————————————————————————————————————————————————————

impl RawModel {
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object) => &object.name,
            Self::Enum(enum_) => &enum_.name,
        }
    }
}

impl ObjectModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: IndexMap::new() }
    }
    pub fn with_property(mut self, key: impl Into<String>, property: PropertyModel) -> Self {
        self.properties.insert(key.into(), property);
        self
    }
    /// Shorthand for a bunch of optional, schema-less properties.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.properties.insert(key.into(), PropertyModel::default());
        }
        self
    }
}

impl PropertyModel {
    pub fn required() -> Self {
        Self { required: true, ..Self::default() }
    }
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.schema.insert(field.into(), value);
        self
    }
}

impl EnumModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: Vec::new() }
    }
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.push(EnumValueModel { key: key.into(), value });
        self
    }
    /// Enum whose values are their own labels.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            self.values.push(EnumValueModel { value: Value::String(key.clone()), key });
        }
        self
    }
}

impl From<ObjectModel> for RawModel {
    fn from(model: ObjectModel) -> Self {
        Self::Object(model)
    }
}

impl From<EnumModel> for RawModel {
    fn from(model: EnumModel) -> Self {
        Self::Enum(model)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

/// Parse a JSON document holding either one model or an array of models.
pub fn load_models_from_str(source: &str) -> Result<Vec<RawModel>, Error> {
    let document = crate::path_de::from_str_with_path::<Value>(source)?;
    if document.is_array() {
        crate::path_de::from_value_with_path::<Vec<RawModel>>(document)
    } else {
        let model = crate::path_de::from_value_with_path::<RawModel>(document)?;
        Ok(vec![model])
    }
}

pub fn load_models_from_file(path: &Path) -> Result<Vec<RawModel>, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_models_from_str(&source).map_err(|error| Error::InFile {
        path: path.to_path_buf(),
        source: Box::new(error),
    })
}
