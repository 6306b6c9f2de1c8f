use serde::Deserialize;

use super::common::RawParameter;

/// Top-level Swagger 1.0 document: operations nested under per-path `apis`.
#[derive(Debug, Clone, Deserialize)]
pub struct Swagger1Document {
    #[serde(default)]
    pub swagger: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub apis: Vec<ApiDeclaration>,
}

/// One path entry carrying its operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDeclaration {
    pub path: String,
    #[serde(default)]
    pub operations: Vec<Swagger1Operation>,
}

/// A Swagger 1.0 operation: method given explicitly, name via `nickname`.
#[derive(Debug, Clone, Deserialize)]
pub struct Swagger1Operation {
    pub method: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}
