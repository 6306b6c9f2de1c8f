use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Info block shared by Swagger 2.0 and OpenAPI 3.x documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A path item as it appears on the wire: HTTP verbs (and the path-level
/// `parameters` key) mapped to raw values, decoded per entry.
pub type RawPathItem = IndexMap<String, Value>;

/// An operation object under a path verb (Swagger 2.0 / OpenAPI 3.x).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOperation {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    /// Raw parameter entries; each is either an inline parameter object or
    /// a `$ref` into the shared parameter section.
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RawRequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, Value>,
    #[serde(default)]
    pub security: Option<Value>,
}

/// OpenAPI 3.x request body: media types mapped to schema holders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequestBody {
    #[serde(default)]
    pub content: IndexMap<String, RawMediaObject>,
    #[serde(default)]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMediaObject {
    #[serde(default)]
    pub schema: Option<RawMediaSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMediaSchema {
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
}

/// A parameter object before classification. Field coverage is the union of
/// the three dialects; `paramType` is Swagger 1.0's spelling of `in`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "in", default)]
    pub location: Option<String>,
    #[serde(rename = "paramType", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,
    #[serde(default)]
    pub schema: Option<RawParameterSchema>,
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
    #[serde(rename = "x-exclude-from-bindings", default)]
    pub exclude_from_bindings: bool,
    #[serde(rename = "x-proxy-header", default)]
    pub proxy_header: Option<String>,
    #[serde(rename = "x-name-pattern", default)]
    pub name_pattern: Option<String>,
}

/// Inline schema attached to a parameter; when present it becomes the
/// effective type source for the parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameterSchema {
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,
}

/// A shared-schema (definition) object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,
    #[serde(rename = "x-enum-labels", default)]
    pub enum_labels: Vec<String>,
}

/// One property inside a [`SchemaObject`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
}
