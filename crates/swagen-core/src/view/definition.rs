use serde::Serialize;

/// A named, reusable data shape declared in the schema's shared section,
/// referenced by parameters and responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    pub name: String,
    pub properties: Vec<Property>,
}

/// One property of a [`Definition`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    /// Whether the owning definition lists this property as required.
    pub required: bool,
    /// Name of the referenced definition when the property is a `$ref`.
    pub ref_type: Option<String>,
    /// Scalar type name when the property declares one inline.
    pub type_name: Option<String>,
}

/// An enum component schema zipped with its display-label sidecar array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enumeration {
    pub name: String,
    pub raw_values: Vec<serde_json::Value>,
    /// Same length as `raw_values`; `display[i]` labels `raw_values[i]`.
    pub display: Vec<EnumerationLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumerationLabel {
    pub key: serde_json::Value,
    pub label: String,
}
