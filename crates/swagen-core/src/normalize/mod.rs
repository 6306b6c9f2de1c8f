pub mod classifier;
pub mod enumerations;
pub mod identifier;
pub mod openapi3;
pub mod registry;
pub mod swagger1;
pub mod swagger2;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{NormalizeError, SchemaError};
use crate::parse;
use crate::view::{Document, Header, Operation};

/// The three supported schema description formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Swagger1,
    Swagger2,
    OpenApi3,
}

/// Inspect the discriminating top-level fields and select exactly one
/// dialect. A document with no recognizable version marker and neither
/// `paths` nor `apis` is rejected outright.
pub fn detect_dialect(value: &Value) -> Result<Dialect, SchemaError> {
    let Some(object) = value.as_object() else {
        return Err(SchemaError::UnrecognizedDialect);
    };

    match object.get("swagger") {
        Some(Value::String(version)) if version.starts_with('1') => Ok(Dialect::Swagger1),
        Some(Value::String(_)) => Ok(Dialect::Swagger2),
        _ => {
            if object.contains_key("openapi") || object.contains_key("paths") {
                Ok(Dialect::OpenApi3)
            } else if object.contains_key("apis") {
                Ok(Dialect::Swagger1)
            } else {
                Err(SchemaError::UnrecognizedDialect)
            }
        }
    }
}

/// Normalize one parsed schema document into the canonical view model.
///
/// Pure and synchronous: one input value in, one [`Document`] out, no shared
/// state across invocations.
pub fn normalize(value: &Value) -> Result<Document, NormalizeError> {
    match detect_dialect(value)? {
        Dialect::Swagger1 => {
            let doc = parse::decode("Swagger 1.0", value)?;
            swagger1::normalize(&doc)
        }
        Dialect::Swagger2 => {
            let doc = parse::decode("Swagger 2.0", value)?;
            swagger2::normalize(&doc)
        }
        Dialect::OpenApi3 => {
            let doc = parse::decode("OpenAPI 3.x", value)?;
            let mut document = openapi3::normalize(&doc)?;
            document.enumerations = enumerations::extract(&doc)?;
            Ok(document)
        }
    }
}

/// Accumulates operations while rejecting identifier collisions, surfacing
/// both conflicting method+path pairs.
pub(crate) struct OperationCollector {
    operations: Vec<Operation>,
    seen: HashMap<String, usize>,
}

impl OperationCollector {
    pub(crate) fn new() -> Self {
        Self {
            operations: Vec::new(),
            seen: HashMap::new(),
        }
    }

    pub(crate) fn push(&mut self, operation: Operation) -> Result<(), NormalizeError> {
        if let Some(&index) = self.seen.get(&operation.method_name) {
            let first = &self.operations[index];
            return Err(NormalizeError::DuplicateOperation {
                name: operation.method_name.clone(),
                first_method: first.method.as_str().to_string(),
                first_path: first.path.clone(),
                second_method: operation.method.as_str().to_string(),
                second_path: operation.path.clone(),
            });
        }
        self.seen
            .insert(operation.method_name.clone(), self.operations.len());
        self.operations.push(operation);
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<Operation> {
        self.operations
    }
}

/// Build the static request headers implied by `produces`/`consumes`
/// metadata: an `Accept` header listing the produced media types and a
/// `Content-Type` header for the consumed ones, each single-quoted.
pub(crate) fn static_headers(produces: &[String], consumes: &[String]) -> Vec<Header> {
    let mut headers = Vec::new();
    if !produces.is_empty() {
        headers.push(Header {
            name: "Accept".to_string(),
            value: quote_list(produces),
        });
    }
    if !consumes.is_empty() {
        headers.push(Header {
            name: "Content-Type".to_string(),
            value: quote_list(consumes),
        });
    }
    headers
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn detects_swagger1_by_version_marker() {
        let doc = json!({ "swagger": "1.0", "apis": [] });
        assert_eq!(detect_dialect(&doc).unwrap(), Dialect::Swagger1);
    }

    #[test]
    fn detects_swagger2_by_version_marker() {
        let doc = json!({ "swagger": "2.0", "info": {}, "paths": {} });
        assert_eq!(detect_dialect(&doc).unwrap(), Dialect::Swagger2);
    }

    #[test]
    fn detects_openapi3_without_swagger_marker() {
        let doc = json!({ "openapi": "3.0.1", "info": {}, "paths": {} });
        assert_eq!(detect_dialect(&doc).unwrap(), Dialect::OpenApi3);
        let bare = json!({ "paths": {} });
        assert_eq!(detect_dialect(&bare).unwrap(), Dialect::OpenApi3);
    }

    #[test]
    fn detects_swagger1_by_apis_section() {
        let doc = json!({ "apis": [] });
        assert_eq!(detect_dialect(&doc).unwrap(), Dialect::Swagger1);
    }

    #[test]
    fn unrecognizable_document_is_rejected() {
        assert!(matches!(
            detect_dialect(&json!({ "title": "not a schema" })),
            Err(SchemaError::UnrecognizedDialect)
        ));
        assert!(matches!(
            detect_dialect(&json!([1, 2, 3])),
            Err(SchemaError::UnrecognizedDialect)
        ));
    }

    #[test]
    fn accept_header_joins_quoted_media_types() {
        let headers = static_headers(
            &["application/json".to_string(), "text/plain".to_string()],
            &[],
        );
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name, "Accept");
        assert_eq!(headers[0].value, "'application/json', 'text/plain'");
    }

    #[test]
    fn consumes_becomes_content_type() {
        let headers = static_headers(&[], &["application/json".to_string()]);
        assert_eq!(headers[0].name, "Content-Type");
        assert_eq!(headers[0].value, "'application/json'");
    }
}
