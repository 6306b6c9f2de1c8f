use crate::error::NormalizeError;
use crate::parse::openapi3::OpenApi3Document;
use crate::view::{Enumeration, EnumerationLabel};

/// Scan OpenAPI 3.x component schemas for `enum` values and zip them with
/// the `x-enum-labels` sidecar array into display pairs.
///
/// When the sidecar is present it must match the enum length exactly; a
/// mismatch is fatal. A schema with no sidecar at all falls back to the raw
/// values' own string forms as labels, keeping `display` parallel to
/// `raw_values`.
pub fn extract(doc: &OpenApi3Document) -> Result<Vec<Enumeration>, NormalizeError> {
    let Some(components) = &doc.components else {
        return Ok(Vec::new());
    };

    let mut enumerations = Vec::new();
    for (name, schema) in &components.schemas {
        if schema.enum_values.is_empty() {
            continue;
        }

        let display = if schema.enum_labels.is_empty() {
            schema
                .enum_values
                .iter()
                .map(|value| EnumerationLabel {
                    key: value.clone(),
                    label: label_from_value(value),
                })
                .collect()
        } else {
            if schema.enum_labels.len() != schema.enum_values.len() {
                return Err(NormalizeError::MalformedEnumeration {
                    name: name.clone(),
                    values: schema.enum_values.len(),
                    labels: schema.enum_labels.len(),
                });
            }
            schema
                .enum_values
                .iter()
                .zip(&schema.enum_labels)
                .map(|(value, label)| EnumerationLabel {
                    key: value.clone(),
                    label: label.clone(),
                })
                .collect()
        };

        enumerations.push(Enumeration {
            name: name.clone(),
            raw_values: schema.enum_values.clone(),
            display,
        });
    }
    Ok(enumerations)
}

fn label_from_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
