use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::common::{Info, RawParameter, RawPathItem, SchemaObject};

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, Deserialize)]
pub struct Swagger2Document {
    pub swagger: String,
    pub info: Info,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(rename = "securityDefinitions", default)]
    pub security_definitions: Option<Value>,
    #[serde(default)]
    pub security: Option<Value>,
    #[serde(default)]
    pub paths: IndexMap<String, RawPathItem>,
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaObject>,
    /// Shared parameter section targeted by `#/parameters/Name` refs.
    #[serde(default)]
    pub parameters: IndexMap<String, RawParameter>,
}
