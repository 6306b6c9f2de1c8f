use indexmap::IndexMap;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::parse::common::RawParameter;
use crate::parse::swagger1::Swagger1Document;
use crate::view::{Document, HttpMethod, Operation, Parameter, ParameterLocation};

use super::identifier;
use super::{OperationCollector, static_headers};

/// Normalize a Swagger 1.0 document: operations are nested under per-path
/// `apis[].operations[]` with the method given explicitly. Only body, path,
/// query and form parameter kinds exist; there is no shared-schema section
/// and no nested-group synthesis.
pub fn normalize(doc: &Swagger1Document) -> Result<Document, NormalizeError> {
    let mut collector = OperationCollector::new();

    for api in &doc.apis {
        for op in &api.operations {
            let Some(method) = HttpMethod::from_key(&op.method) else {
                log::warn!(
                    "skipping operation with unauthorized method {} at {}",
                    op.method,
                    api.path
                );
                continue;
            };

            let method_name = op
                .nickname
                .clone()
                .unwrap_or_else(|| identifier::method_name(&op.method, &api.path));

            let parameters = op
                .parameters
                .iter()
                .filter_map(map_parameter)
                .collect::<Vec<_>>();

            collector.push(Operation {
                path: api.path.clone(),
                method,
                method_name,
                summary: op.summary.clone(),
                parameters,
                headers: static_headers(&op.produces, &[]),
                response_schema: None,
                tags: Vec::new(),
                is_secure: false,
            })?;
        }
    }

    let operations = collector.finish();
    let fingerprint = Document::fingerprint_of(&operations);

    Ok(Document {
        description: doc.description.clone(),
        domain_base_url: doc.base_path.clone().unwrap_or_default(),
        is_secure: false,
        operations,
        definitions: IndexMap::new(),
        enumerations: Vec::new(),
        fingerprint,
    })
}

fn map_parameter(raw: &RawParameter) -> Option<Parameter> {
    let kind = raw.param_type.as_deref().or(raw.location.as_deref());
    let location = match kind {
        Some("path") => ParameterLocation::Path,
        Some("query") => ParameterLocation::Query,
        Some("body") => ParameterLocation::Body,
        Some("form") | Some("formData") => ParameterLocation::Form,
        Some("header") => return None,
        other => {
            log::warn!("skipping parameter with unsupported paramType {:?}", other);
            return None;
        }
    };

    let name = match &raw.name {
        Some(name) => name.clone(),
        None => {
            log::warn!("skipping parameter without a name");
            return None;
        }
    };

    let is_singleton = raw.enum_values.len() == 1;
    let singleton_value: Option<Value> = is_singleton.then(|| raw.enum_values[0].clone());

    let pattern = match location {
        ParameterLocation::Query => raw.name_pattern.clone(),
        _ => None,
    };

    Some(Parameter {
        name,
        location,
        required: raw.required,
        ref_type: None,
        type_name: raw.type_name.clone(),
        is_collection: false,
        is_singleton,
        singleton_value,
        pattern,
    })
}
