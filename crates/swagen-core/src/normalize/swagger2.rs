use serde_json::Value;

use crate::error::NormalizeError;
use crate::parse::common::{RawOperation, RawParameter};
use crate::parse::swagger2::Swagger2Document;
use crate::parse::decode;
use crate::view::{Document, HttpMethod, Operation};

use super::classifier::ParameterClassifier;
use super::identifier;
use super::registry::Registry;
use super::{OperationCollector, static_headers};

/// Normalize a Swagger 2.0 document: operations are the allow-listed verb
/// keys of each path item, and a path-level `parameters` key supplies
/// parameters shared by every verb under that path.
pub fn normalize(doc: &Swagger2Document) -> Result<Document, NormalizeError> {
    let registry = Registry::build(&doc.definitions, &doc.parameters)?;
    let mut collector = OperationCollector::new();

    for (path, item) in &doc.paths {
        let shared: Vec<Value> = match item.get("parameters") {
            Some(value) => decode("Swagger 2.0", value)?,
            None => Vec::new(),
        };

        for (key, value) in item {
            if key == "parameters" {
                continue;
            }
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            let op: RawOperation = decode("Swagger 2.0", value)?;

            let mut classifier = ParameterClassifier::new(&registry);
            for raw_value in op.parameters.iter().chain(shared.iter()) {
                let raw: RawParameter = decode("Swagger 2.0", raw_value)?;
                classifier.classify(&raw)?;
            }

            let consumes = if op.consumes.is_empty() {
                &doc.consumes
            } else {
                &op.consumes
            };

            collector.push(Operation {
                path: path.clone(),
                method,
                method_name: identifier::method_name(key, path),
                summary: op.description.clone().or_else(|| op.summary.clone()),
                parameters: classifier.finish(),
                headers: static_headers(&op.produces, consumes),
                response_schema: op.responses.get("200").cloned(),
                tags: op.tags.clone(),
                is_secure: doc.security.is_some() || op.security.is_some(),
            })?;
        }
    }

    let operations = collector.finish();
    let fingerprint = Document::fingerprint_of(&operations);

    Ok(Document {
        description: doc.info.description.clone(),
        domain_base_url: base_url(doc),
        is_secure: doc.security_definitions.is_some(),
        operations,
        definitions: registry.definitions,
        enumerations: Vec::new(),
        fingerprint,
    })
}

/// `scheme://host/basePath` when all three pieces are declared, trailing
/// slashes trimmed; empty otherwise.
fn base_url(doc: &Swagger2Document) -> String {
    match (doc.schemes.first(), &doc.host, &doc.base_path) {
        (Some(scheme), Some(host), Some(base_path)) => {
            format!("{}://{}{}", scheme, host, base_path.trim_end_matches('/'))
        }
        _ => String::new(),
    }
}
