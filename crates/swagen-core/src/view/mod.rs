pub mod definition;
pub mod operation;

pub use definition::{Definition, Enumeration, EnumerationLabel, Property};
pub use operation::{Header, HttpMethod, Operation, Parameter, ParameterLocation};

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::{DefaultHasher, Hash, Hasher};

/// The canonical, dialect-independent view model of one API description.
///
/// Built in a single synchronous pass and immutable afterwards; a fresh
/// `Document` is produced per normalization call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub description: Option<String>,
    /// Base URL requests are issued against, or empty when the source
    /// document does not declare enough to derive one.
    pub domain_base_url: String,
    pub is_secure: bool,
    pub operations: Vec<Operation>,
    pub definitions: IndexMap<String, Definition>,
    pub enumerations: Vec<Enumeration>,
    /// Content-derived identifier for template bookkeeping. Hashing the
    /// operation signatures keeps repeated normalizations byte-identical.
    pub fingerprint: String,
}

impl Document {
    /// Derive the bookkeeping fingerprint from the operation signatures.
    pub fn fingerprint_of(operations: &[Operation]) -> String {
        let mut hasher = DefaultHasher::new();
        for op in operations {
            op.method.as_str().hash(&mut hasher);
            op.path.hash(&mut hasher);
        }
        format!("{:016x}", hasher.finish())
    }
}
