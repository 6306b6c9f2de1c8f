use indexmap::IndexMap;

use crate::error::NormalizeError;
use crate::parse::common::RawParameter;
use crate::view::{Parameter, ParameterLocation};

use super::identifier::capitalize_first;
use super::registry::{Registry, ref_key};

/// Classifies raw parameters into canonical [`Parameter`] records for one
/// operation: applies the drop rules, merges inline schemas, resolves
/// references, collapses dotted/indexed nested groups, and tags locations.
///
/// Synthesized nested-group parameters are appended after all directly
/// mapped ones, in the order their group prefix was first seen.
pub struct ParameterClassifier<'a> {
    registry: &'a Registry,
    direct: Vec<Parameter>,
    grouped: IndexMap<String, Parameter>,
}

enum GroupKind {
    /// `prefix[0].field` collapses to an array of the prefix definition.
    List,
    /// `prefix.field` collapses to a reference to the prefix definition.
    Object,
}

impl<'a> ParameterClassifier<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            direct: Vec::new(),
            grouped: IndexMap::new(),
        }
    }

    /// Classify one raw parameter, producing zero or one canonical record.
    pub fn classify(&mut self, raw: &RawParameter) -> Result<(), NormalizeError> {
        if raw.exclude_from_bindings {
            return Ok(());
        }
        if raw.proxy_header.is_some() {
            return Ok(());
        }

        // A bare `$ref` into a shared parameter section stands in for the
        // whole parameter; resolve it before classifying.
        if let Some(ref_path) = &raw.ref_path {
            if Registry::is_parameter_ref(ref_path) {
                let resolved = self.registry.resolve_parameter(ref_path)?.clone();
                return self.classify_effective(&resolved);
            }
        }

        self.classify_effective(raw)
    }

    fn classify_effective(&mut self, raw: &RawParameter) -> Result<(), NormalizeError> {
        // An inline schema becomes the effective type source.
        let mut ref_path = raw.ref_path.clone();
        let mut type_name = raw.type_name.clone();
        let mut enum_values = raw.enum_values.clone();
        if let Some(schema) = &raw.schema {
            if schema.ref_path.is_some() {
                ref_path = schema.ref_path.clone();
            }
            if schema.type_name.is_some() {
                type_name = schema.type_name.clone();
            }
            if !schema.enum_values.is_empty() {
                enum_values = schema.enum_values.clone();
            }
        }

        let Some(name) = raw.name.clone() else {
            log::warn!("dropping parameter without a name");
            return Ok(());
        };

        let location_tag = raw.location.as_deref().or(raw.param_type.as_deref());
        let location = match location_tag {
            Some("path") => ParameterLocation::Path,
            Some("query") => ParameterLocation::Query,
            Some("body") => ParameterLocation::Body,
            Some("formData") | Some("form") => ParameterLocation::Form,
            // Header parameters are never exposed as bindable arguments.
            Some("header") => return Ok(()),
            other => {
                log::warn!(
                    "dropping parameter `{}` with unsupported location {:?}",
                    name,
                    other
                );
                return Ok(());
            }
        };

        // Dotted/indexed names collapse into one synthesized parameter per
        // group prefix, provided a matching definition exists.
        if let Some((prefix, kind)) = group_prefix(&name) {
            if self.grouped.contains_key(prefix) {
                return Ok(());
            }
            let definition_name = capitalize_first(prefix);
            if self.registry.definitions.contains_key(&definition_name) {
                self.grouped.insert(
                    prefix.to_string(),
                    Parameter {
                        name: prefix.to_string(),
                        location,
                        required: raw.required,
                        ref_type: Some(definition_name),
                        type_name: None,
                        is_collection: matches!(kind, GroupKind::List),
                        is_singleton: false,
                        singleton_value: None,
                        pattern: None,
                    },
                );
                return Ok(());
            }
        }

        let ref_type = match &ref_path {
            Some(ref_path) => {
                self.registry.resolve_definition(ref_path)?;
                Some(ref_key(ref_path).to_string())
            }
            None => None,
        };

        let is_singleton = enum_values.len() == 1;
        let singleton_value = is_singleton.then(|| enum_values[0].clone());

        let pattern = match location {
            ParameterLocation::Query => raw.name_pattern.clone(),
            _ => None,
        };

        self.direct.push(Parameter {
            name,
            location,
            required: raw.required,
            ref_type,
            type_name,
            is_collection: false,
            is_singleton,
            singleton_value,
            pattern,
        });
        Ok(())
    }

    /// All classified parameters: direct ones first, then synthesized
    /// groups in first-encounter order.
    pub fn finish(self) -> Vec<Parameter> {
        let mut parameters = self.direct;
        parameters.extend(self.grouped.into_values());
        parameters
    }
}

/// Detect a nested-group parameter name. `prefix[<digits>].field` is the
/// list form and `prefix.field` the object form; the prefix must be
/// non-empty and something must follow the separator.
fn group_prefix(name: &str) -> Option<(&str, GroupKind)> {
    if let Some(bracket) = name.find('[') {
        if bracket > 0 {
            let rest = &name[bracket + 1..];
            if let Some(close) = rest.find(']') {
                let index = &rest[..close];
                let after = &rest[close + 1..];
                if !index.is_empty()
                    && index.bytes().all(|b| b.is_ascii_digit())
                    && after.len() > 1
                    && after.starts_with('.')
                {
                    return Some((&name[..bracket], GroupKind::List));
                }
            }
        }
    }
    if let Some(dot) = name.find('.') {
        if dot > 0 && dot + 1 < name.len() {
            return Some((&name[..dot], GroupKind::Object));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use serde_json::json;

    use super::*;
    use crate::parse::common::{RawParameter, RawParameterSchema, SchemaObject};

    fn registry_with(names: &[&str]) -> Registry {
        let schemas: IndexMap<String, SchemaObject> = names
            .iter()
            .map(|n| (n.to_string(), SchemaObject::default()))
            .collect();
        Registry::build(&schemas, &IndexMap::new()).unwrap()
    }

    fn query_param(name: &str) -> RawParameter {
        RawParameter {
            name: Some(name.to_string()),
            location: Some("query".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn header_parameters_are_dropped() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = query_param("x-request-id");
        param.location = Some("header".to_string());
        classifier.classify(&param).unwrap();
        assert!(classifier.finish().is_empty());
    }

    #[test]
    fn exclusion_extensions_are_dropped() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut excluded = query_param("internal");
        excluded.exclude_from_bindings = true;
        let mut proxied = query_param("x-forwarded-for");
        proxied.proxy_header = Some("X-Forwarded-For".to_string());
        classifier.classify(&excluded).unwrap();
        classifier.classify(&proxied).unwrap();
        assert!(classifier.finish().is_empty());
    }

    #[test]
    fn nested_list_group_collapses_to_one_array_parameter() {
        let registry = registry_with(&["Filter"]);
        let mut classifier = ParameterClassifier::new(&registry);
        classifier.classify(&query_param("filter[0].name")).unwrap();
        classifier.classify(&query_param("filter[0].value")).unwrap();
        classifier.classify(&query_param("filter[1].name")).unwrap();

        let parameters = classifier.finish();
        assert_eq!(parameters.len(), 1);
        let filter = &parameters[0];
        assert_eq!(filter.name, "filter");
        assert_eq!(filter.ref_type.as_deref(), Some("Filter"));
        assert!(filter.is_collection);
    }

    #[test]
    fn dotted_group_collapses_to_reference_parameter() {
        let registry = registry_with(&["Address"]);
        let mut classifier = ParameterClassifier::new(&registry);
        classifier.classify(&query_param("address.street")).unwrap();
        classifier.classify(&query_param("address.city")).unwrap();

        let parameters = classifier.finish();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "address");
        assert_eq!(parameters[0].ref_type.as_deref(), Some("Address"));
        assert!(!parameters[0].is_collection);
    }

    #[test]
    fn dotted_name_without_definition_maps_directly() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        classifier.classify(&query_param("sort.field")).unwrap();

        let parameters = classifier.finish();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "sort.field");
        assert!(parameters[0].ref_type.is_none());
    }

    #[test]
    fn synthesized_groups_follow_direct_parameters() {
        let registry = registry_with(&["Filter"]);
        let mut classifier = ParameterClassifier::new(&registry);
        classifier.classify(&query_param("filter[0].name")).unwrap();
        classifier.classify(&query_param("page")).unwrap();

        let parameters = classifier.finish();
        assert_eq!(parameters[0].name, "page");
        assert_eq!(parameters[1].name, "filter");
    }

    #[test]
    fn singleton_enum_records_its_value() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = query_param("format");
        param.enum_values = vec![json!("json")];
        classifier.classify(&param).unwrap();

        let parameters = classifier.finish();
        assert!(parameters[0].is_singleton);
        assert_eq!(parameters[0].singleton_value, Some(json!("json")));
    }

    #[test]
    fn two_element_enum_is_not_a_singleton() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = query_param("format");
        param.enum_values = vec![json!("json"), json!("xml")];
        classifier.classify(&param).unwrap();
        assert!(!classifier.finish()[0].is_singleton);
    }

    #[test]
    fn inline_schema_is_the_effective_type_source() {
        let registry = registry_with(&["Pet"]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = RawParameter {
            name: Some("pet".to_string()),
            location: Some("body".to_string()),
            required: true,
            ..Default::default()
        };
        param.schema = Some(RawParameterSchema {
            ref_path: Some("#/definitions/Pet".to_string()),
            ..Default::default()
        });
        classifier.classify(&param).unwrap();

        let parameters = classifier.finish();
        assert_eq!(parameters[0].location, ParameterLocation::Body);
        assert_eq!(parameters[0].ref_type.as_deref(), Some("Pet"));
    }

    #[test]
    fn dangling_schema_reference_is_an_error() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = query_param("pet");
        param.schema = Some(RawParameterSchema {
            ref_path: Some("#/definitions/Pet".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            classifier.classify(&param),
            Err(NormalizeError::UnresolvedReference(_))
        ));
    }

    #[test]
    fn name_pattern_surfaces_on_query_parameters() {
        let registry = registry_with(&[]);
        let mut classifier = ParameterClassifier::new(&registry);
        let mut param = query_param("ids");
        param.name_pattern = Some("^ids\\[\\d+\\]$".to_string());
        classifier.classify(&param).unwrap();
        assert_eq!(
            classifier.finish()[0].pattern.as_deref(),
            Some("^ids\\[\\d+\\]$")
        );
    }
}
