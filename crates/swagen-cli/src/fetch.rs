use std::fs;
use std::path::Path;

use thiserror::Error;

use swagen_core::error::SchemaError;
use swagen_core::parse;

/// Failure loading a schema document. Non-success HTTP responses surface
/// their status code; no retries happen here.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Load a schema document from an `http(s)://` URL or a filesystem path
/// into an in-memory JSON value.
pub fn fetch_document(source: &str) -> Result<serde_json::Value, FetchError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        fetch_file(source)
    }
}

fn fetch_url(url: &str) -> Result<serde_json::Value, FetchError> {
    log::info!("fetching schema from {url}");
    let mut response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::StatusCode(status) => FetchError::Status {
            url: url.to_string(),
            status,
        },
        source => FetchError::Transport {
            url: url.to_string(),
            source,
        },
    })?;

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    Ok(parse_body(url, &body)?)
}

fn fetch_file(path: &str) -> Result<serde_json::Value, FetchError> {
    let content = fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_string(),
        source,
    })?;

    Ok(parse_body(path, &content)?)
}

/// Parse fetched text as YAML when the source path carries a `.yaml`/`.yml`
/// extension, JSON otherwise. Query strings and fragments on URLs do not
/// count towards the extension.
fn parse_body(source: &str, content: &str) -> Result<serde_json::Value, SchemaError> {
    if is_yaml_source(source) {
        parse::from_yaml(content)
    } else {
        parse::from_json(content)
    }
}

fn is_yaml_source(source: &str) -> bool {
    let path = source.split(['?', '#']).next().unwrap_or(source);
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_detection_covers_urls_and_paths() {
        assert!(is_yaml_source("schemas/orders.yaml"));
        assert!(is_yaml_source("schemas/orders.yml"));
        assert!(is_yaml_source("https://example.com/v1/schema.yaml"));
        assert!(is_yaml_source("https://example.com/schema.yaml?token=abc"));
        assert!(!is_yaml_source("https://example.com/v2/swagger.json"));
        assert!(!is_yaml_source("https://example.com/swagger"));
    }

    #[test]
    fn fetched_yaml_body_is_parsed_as_yaml() {
        let yaml = "swagger: \"2.0\"\ninfo:\n  title: t\npaths: {}\n";
        let value = parse_body("https://example.com/schema.yaml", yaml).unwrap();
        assert_eq!(value["swagger"], "2.0");

        assert!(parse_body("https://example.com/schema.json", yaml).is_err());
    }
}
