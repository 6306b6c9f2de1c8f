use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Batch configuration loaded from `.swagen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwagenConfig {
    /// Directory generated modules are written into.
    pub output_dir: String,
    /// Schema sources, processed sequentially with per-entry failure
    /// isolation.
    pub schemas: Vec<SchemaEntry>,
}

impl Default for SwagenConfig {
    fn default() -> Self {
        Self {
            output_dir: "src/api".to_string(),
            schemas: Vec::new(),
        }
    }
}

/// One schema source in the batch config.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaEntry {
    /// Output module name; `.js` is appended (slugified) when absent.
    pub name: String,
    /// URL or filesystem path of the schema document.
    pub source: String,
    #[serde(default)]
    pub ignore: bool,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swagen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwagenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SwagenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagen configuration
output_dir: src/api

schemas: []
  # - name: pets
  #   source: https://petstore.example.com/v2/swagger.json
  # - name: orders
  #   source: schemas/orders.yaml
  #   ignore: true
"#
}
