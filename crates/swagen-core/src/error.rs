use thiserror::Error;

/// The input document does not match any supported dialect, or is missing a
/// field the dialect mandates.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unrecognized schema dialect: no swagger/openapi version marker and no paths/apis")]
    UnrecognizedDialect,

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("failed to decode {dialect} document: {source}")]
    Decode {
        dialect: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure during normalization aborts the whole document; there is no
/// partial recovery.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error(
        "duplicate operation identifier `{name}`: {first_method} {first_path} collides with {second_method} {second_path}"
    )]
    DuplicateOperation {
        name: String,
        first_method: String,
        first_path: String,
        second_method: String,
        second_path: String,
    },

    #[error(
        "malformed enumeration `{name}`: {values} enum values but {labels} labels"
    )]
    MalformedEnumeration {
        name: String,
        values: usize,
        labels: usize,
    },
}
