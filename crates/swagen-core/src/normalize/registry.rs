use indexmap::IndexMap;

use crate::error::NormalizeError;
use crate::parse::common::{RawParameter, SchemaObject};
use crate::view::{Definition, Property};

/// Definitions and shared parameters built from the document's reusable
/// sections, looked up by `$ref` pointer.
///
/// A `$ref` of the form `#/definitions/Name` or `#/components/parameters/Name`
/// resolves by its final path segment. Missing keys are an error, never a
/// silent pass-through.
#[derive(Debug, Default)]
pub struct Registry {
    pub definitions: IndexMap<String, Definition>,
    pub parameters: IndexMap<String, RawParameter>,
}

impl Registry {
    /// Build the registry from the document's shared-schema section.
    /// Definitions are registered in a first pass so property references can
    /// point at definitions declared later in the section.
    pub fn build(
        schemas: &IndexMap<String, SchemaObject>,
        shared_parameters: &IndexMap<String, RawParameter>,
    ) -> Result<Self, NormalizeError> {
        let mut definitions = IndexMap::with_capacity(schemas.len());

        for (name, schema) in schemas {
            let mut properties = Vec::with_capacity(schema.properties.len());
            for (prop_name, prop) in &schema.properties {
                let ref_type = match &prop.ref_path {
                    Some(ref_path) => {
                        let key = ref_key(ref_path);
                        if !schemas.contains_key(key) {
                            return Err(NormalizeError::UnresolvedReference(ref_path.clone()));
                        }
                        Some(key.to_string())
                    }
                    None => None,
                };
                properties.push(Property {
                    name: prop_name.clone(),
                    required: schema.required.iter().any(|r| r == prop_name),
                    ref_type,
                    type_name: prop.type_name.clone(),
                });
            }
            definitions.insert(
                name.clone(),
                Definition {
                    name: name.clone(),
                    properties,
                },
            );
        }

        Ok(Self {
            definitions,
            parameters: shared_parameters.clone(),
        })
    }

    /// Resolve a `$ref` against the definitions section.
    pub fn resolve_definition(&self, ref_path: &str) -> Result<&Definition, NormalizeError> {
        self.definitions
            .get(ref_key(ref_path))
            .ok_or_else(|| NormalizeError::UnresolvedReference(ref_path.to_string()))
    }

    /// Resolve a `$ref` against the shared parameter section.
    pub fn resolve_parameter(&self, ref_path: &str) -> Result<&RawParameter, NormalizeError> {
        self.parameters
            .get(ref_key(ref_path))
            .ok_or_else(|| NormalizeError::UnresolvedReference(ref_path.to_string()))
    }

    /// True when `ref_path` targets a shared parameter section rather than
    /// the definitions section.
    pub fn is_parameter_ref(ref_path: &str) -> bool {
        ref_path.contains("/parameters/")
    }
}

/// The lookup key of a `$ref` pointer is its final path segment.
pub fn ref_key(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schemas_with(names: &[&str]) -> IndexMap<String, SchemaObject> {
        names
            .iter()
            .map(|n| (n.to_string(), SchemaObject::default()))
            .collect()
    }

    #[test]
    fn ref_key_takes_last_segment() {
        assert_eq!(ref_key("#/definitions/User"), "User");
        assert_eq!(ref_key("#/components/parameters/PageSize"), "PageSize");
        assert_eq!(ref_key("User"), "User");
    }

    #[test]
    fn resolving_own_key_returns_identical_definition() {
        let registry = Registry::build(&schemas_with(&["User"]), &IndexMap::new()).unwrap();
        let resolved = registry.resolve_definition("#/definitions/User").unwrap();
        assert!(std::ptr::eq(resolved, &registry.definitions["User"]));
    }

    #[test]
    fn missing_key_is_an_error() {
        let registry = Registry::build(&schemas_with(&["User"]), &IndexMap::new()).unwrap();
        let err = registry.resolve_definition("#/definitions/Order").unwrap_err();
        assert!(matches!(err, NormalizeError::UnresolvedReference(r) if r.contains("Order")));
    }

    #[test]
    fn forward_property_reference_resolves() {
        let mut schemas = IndexMap::new();
        let mut user = SchemaObject::default();
        user.properties.insert(
            "address".to_string(),
            crate::parse::common::PropertySchema {
                ref_path: Some("#/definitions/Address".to_string()),
                type_name: None,
            },
        );
        user.required.push("address".to_string());
        schemas.insert("User".to_string(), user);
        schemas.insert("Address".to_string(), SchemaObject::default());

        let registry = Registry::build(&schemas, &IndexMap::new()).unwrap();
        let prop = &registry.definitions["User"].properties[0];
        assert_eq!(prop.ref_type.as_deref(), Some("Address"));
        assert!(prop.required);
    }

    #[test]
    fn dangling_property_reference_fails() {
        let mut schemas = IndexMap::new();
        let mut user = SchemaObject::default();
        user.properties.insert(
            "address".to_string(),
            crate::parse::common::PropertySchema {
                ref_path: Some("#/definitions/Address".to_string()),
                type_name: None,
            },
        );
        schemas.insert("User".to_string(), user);

        assert!(Registry::build(&schemas, &IndexMap::new()).is_err());
    }
}
