use indexmap::IndexMap;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::parse::common::{RawOperation, RawParameter};
use crate::parse::decode;
use crate::parse::openapi3::OpenApi3Document;
use crate::view::{Document, HttpMethod, Operation};

use super::classifier::ParameterClassifier;
use super::identifier;
use super::registry::{Registry, ref_key};
use super::{OperationCollector, static_headers};

/// Normalize an OpenAPI 3.x document. Shares the verb allow-list and
/// path-level parameter handling with Swagger 2.0; additionally a
/// `requestBody` schema reference is synthesized into a body parameter, and
/// parameter entries may themselves be `$ref`s into `components.parameters`.
pub fn normalize(doc: &OpenApi3Document) -> Result<Document, NormalizeError> {
    // Wild documents mix `components` with the legacy flat sections; merge
    // both, letting `components` win on key conflicts.
    let mut schemas = doc.definitions.clone();
    let mut shared_parameters = doc.parameters.clone();
    if let Some(components) = &doc.components {
        schemas.extend(components.schemas.clone());
        shared_parameters.extend(components.parameters.clone());
    }
    let registry = Registry::build(&schemas, &shared_parameters)?;

    let document_secure = doc.security.is_some()
        || doc.security_definitions.is_some()
        || doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.is_some());

    let mut collector = OperationCollector::new();

    for (path, item) in &doc.paths {
        let shared: Vec<Value> = match item.get("parameters") {
            Some(value) => decode("OpenAPI 3.x", value)?,
            None => Vec::new(),
        };

        for (key, value) in item {
            if key == "parameters" {
                continue;
            }
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            let op: RawOperation = decode("OpenAPI 3.x", value)?;

            let mut classifier = ParameterClassifier::new(&registry);
            for raw_value in &op.parameters {
                let raw: RawParameter = decode("OpenAPI 3.x", raw_value)?;
                classifier.classify(&raw)?;
            }
            for body in body_parameters(&op) {
                classifier.classify(&body)?;
            }
            for raw_value in &shared {
                let raw: RawParameter = decode("OpenAPI 3.x", raw_value)?;
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
        is_secure: document_secure,
        operations,
        definitions: registry.definitions,
        enumerations: Vec::new(),
        fingerprint,
    })
}

/// Synthesize a body parameter per `requestBody` media type carrying a
/// schema reference, named after the referenced definition.
fn body_parameters(op: &RawOperation) -> Vec<RawParameter> {
    let Some(request_body) = &op.request_body else {
        return Vec::new();
    };
    let mut bodies: IndexMap<String, RawParameter> = IndexMap::new();
    for media in request_body.content.values() {
        let Some(ref_path) = media.schema.as_ref().and_then(|s| s.ref_path.clone()) else {
            continue;
        };
        let name = ref_key(&ref_path).to_string();
        bodies.entry(name.clone()).or_insert(RawParameter {
            name: Some(name),
            location: Some("body".to_string()),
            required: true,
            ref_path: Some(ref_path),
            ..Default::default()
        });
    }
    bodies.into_values().collect()
}

/// `servers[0].url` when declared, falling back to the legacy
/// `scheme://host/basePath` triple; empty otherwise.
fn base_url(doc: &OpenApi3Document) -> String {
    if let Some(server) = doc.servers.first() {
        return server.url.trim_end_matches('/').to_string();
    }
    match (doc.schemes.first(), &doc.host, &doc.base_path) {
        (Some(scheme), Some(host), Some(base_path)) => {
            format!("{}://{}{}", scheme, host, base_path.trim_end_matches('/'))
        }
        _ => String::new(),
    }
}
