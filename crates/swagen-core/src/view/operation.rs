use serde::Serialize;

/// HTTP verbs an operation may use. Map keys outside this list (and the
/// Swagger 2.0 path-level `parameters` key) are not operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Copy,
    Head,
    Options,
    Link,
    Unlink,
    Purge,
    Lock,
    Unlock,
    Propfind,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Copy => "COPY",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Link => "LINK",
            HttpMethod::Unlink => "UNLINK",
            HttpMethod::Purge => "PURGE",
            HttpMethod::Lock => "LOCK",
            HttpMethod::Unlock => "UNLOCK",
            HttpMethod::Propfind => "PROPFIND",
        }
    }

    /// Parse a path-item key or explicit method string, case-insensitively.
    /// Returns `None` for anything outside the allow-list.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            "COPY" => Some(HttpMethod::Copy),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            "LINK" => Some(HttpMethod::Link),
            "UNLINK" => Some(HttpMethod::Unlink),
            "PURGE" => Some(HttpMethod::Purge),
            "LOCK" => Some(HttpMethod::Lock),
            "UNLOCK" => Some(HttpMethod::Unlock),
            "PROPFIND" => Some(HttpMethod::Propfind),
            _ => None,
        }
    }
}

/// One callable endpoint after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub path: String,
    pub method: HttpMethod,
    /// Unique identifier within the owning document.
    pub method_name: String,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    pub headers: Vec<Header>,
    /// Raw `200` response entry, passed through untouched for the renderer.
    pub response_schema: Option<serde_json::Value>,
    pub tags: Vec<String>,
    pub is_secure: bool,
}

/// Where a parameter is bound in the request. Header-location parameters are
/// filtered out before a `Parameter` is ever materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    Form,
}

/// A bindable request argument, owned exclusively by its operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    /// Name of the referenced definition, when the parameter's type is a
    /// shared shape (directly or via nested-group synthesis).
    pub ref_type: Option<String>,
    /// Scalar type name declared inline.
    pub type_name: Option<String>,
    /// True when the synthesized parameter is an array of `ref_type`.
    pub is_collection: bool,
    /// True when the value domain is a single-element enumeration; callers
    /// need not supply the value.
    pub is_singleton: bool,
    pub singleton_value: Option<serde_json::Value>,
    /// `x-name-pattern` extension on query parameters.
    pub pattern: Option<String>,
}

/// A static request header derived from `produces`/`consumes` metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}
