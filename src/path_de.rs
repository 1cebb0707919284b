use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, Error> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(into_error)?;
    de.end().map_err(|source| Error::Json { json_path: ".".to_owned(), source })?;
    Ok(value)
}

pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(into_error)
}

fn into_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let json_path = err.path().to_string();
    Error::Json { json_path, source: err.into_inner() }
}
