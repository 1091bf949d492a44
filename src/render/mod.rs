//! Entry page rendering module
//!
//! Turns the explorer configuration into the HTML page that bootstraps the
//! browser-side UI. The dispatcher consumes this through the
//! [`PageRenderer`] trait; [`IndexPage`] is the bundled implementation
//! backed by an embedded template.

mod template;

use crate::config::ExplorerConfig;
use thiserror::Error;

/// Failure producing the entry page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(String),
}

/// Renders the entry page from the explorer configuration
pub trait PageRenderer: Send + Sync {
    fn render(&self, config: &ExplorerConfig) -> Result<String, RenderError>;
}

/// Default entry page renderer backed by the embedded template
///
/// Scalar option values are embedded as JSON-encoded JS literals so quotes
/// or backslashes in them cannot break the page. Script fragments, plugin
/// references, and `ui_config` values are opaque by contract and inserted
/// verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexPage;

impl PageRenderer for IndexPage {
    fn render(&self, config: &ExplorerConfig) -> Result<String, RenderError> {
        let mut plugins = String::new();
        for plugin in &config.plugins {
            plugins.push_str(",\n      ");
            plugins.push_str(plugin);
        }

        let mut ui_config = String::new();
        for (key, value) in &config.ui_config {
            ui_config.push_str(&format!("    {key}: {value},\n"));
        }

        let page = template::INDEX_TEMPLATE
            .replace("{{DOM_ID}}", &config.dom_id)
            .replace("{{BEFORE_SCRIPT}}", &config.before_script)
            .replace("{{URL}}", &js_string(&config.document_url)?)
            .replace("{{DEEP_LINKING}}", &js_bool(config.deep_linking))
            .replace("{{DOC_EXPANSION}}", &js_string(&config.doc_expansion)?)
            .replace(
                "{{DOM_ID_SELECTOR}}",
                &js_string(&format!("#{}", config.dom_id))?,
            )
            .replace(
                "{{PERSIST_AUTHORIZATION}}",
                &js_bool(config.persist_authorization),
            )
            .replace("{{PLUGINS}}", &plugins)
            .replace("{{UI_CONFIG}}", &ui_config)
            .replace("{{AFTER_SCRIPT}}", &config.after_script);

        Ok(page)
    }
}

/// Encode a configuration value as a JS string literal
fn js_string(value: &str) -> Result<String, RenderError> {
    serde_json::to_string(value).map_err(|e| RenderError::Template(e.to_string()))
}

fn js_bool(value: bool) -> String {
    value.to_string()
}
