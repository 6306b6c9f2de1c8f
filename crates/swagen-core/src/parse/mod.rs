pub mod common;
pub mod openapi3;
pub mod swagger1;
pub mod swagger2;

use crate::error::SchemaError;

/// Parse a schema document from JSON text into an in-memory value. Dialect
/// detection and typed decoding happen in the normalizer.
pub fn from_json(input: &str) -> Result<serde_json::Value, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(value)
}

/// Parse a schema document from YAML text into an in-memory JSON value.
pub fn from_yaml(input: &str) -> Result<serde_json::Value, SchemaError> {
    let value: serde_json::Value = serde_yaml_ng::from_str(input)?;
    Ok(value)
}

/// Decode a JSON value into one dialect's typed document, tagging decode
/// failures with the dialect name.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    dialect: &'static str,
    value: &serde_json::Value,
) -> Result<T, SchemaError> {
    serde_json::from_value(value.clone()).map_err(|source| SchemaError::Decode { dialect, source })
}
