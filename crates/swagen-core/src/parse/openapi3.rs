use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::common::{Info, RawParameter, RawPathItem, SchemaObject};

/// Top-level OpenAPI 3.x document. Documents in the wild are hybrids, so
/// alongside `servers` and `components` this keeps the legacy Swagger 2.0
/// fields (`schemes`/`host`/`basePath`, flat `definitions` and `parameters`)
/// that some emitters still populate.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApi3Document {
    #[serde(default)]
    pub openapi: Option<String>,
    pub info: Info,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub paths: IndexMap<String, RawPathItem>,
    #[serde(default)]
    pub components: Option<Components>,
    #[serde(default)]
    pub security: Option<Value>,

    // Legacy hybrid fields
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
    pub definitions: IndexMap<String, SchemaObject>,
    #[serde(default)]
    pub parameters: IndexMap<String, RawParameter>,
}

/// A server URL entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Components object holding reusable definitions and parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaObject>,
    #[serde(default)]
    pub parameters: IndexMap<String, RawParameter>,
    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: Option<Value>,
}
