use heck::ToKebabCase;
use minijinja::{AutoEscape, Environment};
use thiserror::Error;

use swagen_core::DocumentRenderer;
use swagen_core::view::Document;

static API_TEMPLATE: &str = include_str!("templates/api.jinja");
static BASE_TEMPLATE: &str = include_str!("templates/base.jinja");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders a canonical [`Document`] into an axios-style JavaScript API
/// module, plus the shared base scaffold the modules import.
pub struct AxiosRenderer;

impl AxiosRenderer {
    fn environment() -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();
        // The templates emit JavaScript; the `.js`-keyed auto-escaping
        // would JSON-quote every interpolation.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template("api.js", API_TEMPLATE)?;
        env.add_template("base.js", BASE_TEMPLATE)?;
        Ok(env)
    }

    /// Render one API module from a normalized document.
    pub fn render_document(document: &Document) -> Result<String, RenderError> {
        let env = Self::environment()?;
        let template = env.get_template("api.js")?;
        log::debug!(
            "rendering {} operations (fingerprint {})",
            document.operations.len(),
            document.fingerprint
        );
        Ok(template.render(document)?)
    }

    /// Render the schema-independent base scaffold every generated module
    /// imports.
    pub fn render_base() -> Result<String, RenderError> {
        let env = Self::environment()?;
        let template = env.get_template("base.js")?;
        Ok(template.render(())?)
    }
}

impl DocumentRenderer for AxiosRenderer {
    type Error = RenderError;

    fn render(&self, document: &Document) -> Result<String, Self::Error> {
        Self::render_document(document)
    }
}

/// Derive the output module file name for a configured schema entry.
pub fn module_file_name(name: &str) -> String {
    if name.ends_with(".js") {
        name.to_string()
    } else {
        format!("{}.js", name.to_kebab_case())
    }
}
