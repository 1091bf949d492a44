// Configuration types module
// Defines the explorer's runtime options and their builder

use crate::assets::AssetService;
use crate::registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Explorer configuration
///
/// Immutable once built: the dispatcher only ever reads it. Construct via
/// [`ExplorerConfig::builder`], or deserialize the plain option fields from
/// an embedding application's own configuration file.
#[derive(Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Location of the API description advertised to the rendered page
    #[serde(default = "default_document_url")]
    pub document_url: String,
    /// Operation list expansion: "list", "full", or "none"
    ///
    /// Unrecognized values are passed through uninterpreted; the rendered
    /// page decides what to do with them.
    #[serde(default = "default_doc_expansion")]
    pub doc_expansion: String,
    /// DOM anchor id the rendered page mounts into
    #[serde(default = "default_dom_id")]
    pub dom_id: String,
    /// Registry instance name the description document is fetched under
    ///
    /// Falls back to [`registry::DEFAULT_INSTANCE`] when left empty.
    #[serde(default = "default_instance_name")]
    pub instance_name: String,
    #[serde(default = "default_deep_linking")]
    pub deep_linking: bool,
    #[serde(default)]
    pub persist_authorization: bool,
    /// Script fragment injected verbatim before UI initialization
    #[serde(default)]
    pub before_script: String,
    /// Script fragment injected verbatim after UI initialization
    #[serde(default)]
    pub after_script: String,
    /// Extra UI plugin references, injected in order
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Extra literal UI properties (key -> value fragment)
    #[serde(default)]
    pub ui_config: BTreeMap<String, String>,
    /// Alternate asset service; the dispatcher constructs the default
    /// directory-backed one when unset
    #[serde(skip)]
    pub asset_service: Option<Arc<dyn AssetService>>,
}

fn default_document_url() -> String {
    "doc.json".to_string()
}

fn default_doc_expansion() -> String {
    "list".to_string()
}

fn default_dom_id() -> String {
    "swagger-ui".to_string()
}

fn default_instance_name() -> String {
    registry::DEFAULT_INSTANCE.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_deep_linking() -> bool {
    true
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            document_url: default_document_url(),
            doc_expansion: default_doc_expansion(),
            dom_id: default_dom_id(),
            instance_name: default_instance_name(),
            deep_linking: default_deep_linking(),
            persist_authorization: false,
            before_script: String::new(),
            after_script: String::new(),
            plugins: Vec::new(),
            ui_config: BTreeMap::new(),
            asset_service: None,
        }
    }
}

impl fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field("document_url", &self.document_url)
            .field("doc_expansion", &self.doc_expansion)
            .field("dom_id", &self.dom_id)
            .field("instance_name", &self.instance_name)
            .field("deep_linking", &self.deep_linking)
            .field("persist_authorization", &self.persist_authorization)
            .field("before_script", &self.before_script)
            .field("after_script", &self.after_script)
            .field("plugins", &self.plugins)
            .field("ui_config", &self.ui_config)
            .field("asset_service", &self.asset_service.is_some())
            .finish()
    }
}

impl ExplorerConfig {
    /// Start building a configuration from the documented defaults
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }
}

/// Fluent builder for [`ExplorerConfig`]
///
/// Setters apply in call order over the defaults; `build` freezes the result
/// and applies the instance-name fallback.
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    /// Set the advertised API description location (default `doc.json`)
    #[must_use]
    pub fn document_url(mut self, url: impl Into<String>) -> Self {
        self.config.document_url = url.into();
        self
    }

    /// Set operation list expansion: "list", "full", or "none"
    #[must_use]
    pub fn doc_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.config.doc_expansion = expansion.into();
        self
    }

    /// Set the DOM anchor id (default `swagger-ui`)
    #[must_use]
    pub fn dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.config.dom_id = dom_id.into();
        self
    }

    /// Set the registry instance name the document is fetched under
    #[must_use]
    pub fn instance_name(mut self, name: impl Into<String>) -> Self {
        self.config.instance_name = name.into();
        self
    }

    /// Enable or disable deep linking (default true)
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn deep_linking(mut self, deep_linking: bool) -> Self {
        self.config.deep_linking = deep_linking;
        self
    }

    /// Persist authorization over browser close/refresh (default false)
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn persist_authorization(mut self, persist: bool) -> Self {
        self.config.persist_authorization = persist;
        self
    }

    /// Script fragment to run right before the UI object is created
    #[must_use]
    pub fn before_script(mut self, script: impl Into<String>) -> Self {
        self.config.before_script = script.into();
        self
    }

    /// Script fragment to run right after the UI object is created
    #[must_use]
    pub fn after_script(mut self, script: impl Into<String>) -> Self {
        self.config.after_script = script.into();
        self
    }

    /// Replace the list of extra UI plugin references
    #[must_use]
    pub fn plugins(mut self, plugins: Vec<String>) -> Self {
        self.config.plugins = plugins;
        self
    }

    /// Replace the extra literal UI properties
    #[must_use]
    pub fn ui_config(mut self, props: BTreeMap<String, String>) -> Self {
        self.config.ui_config = props;
        self
    }

    /// Supply an alternate asset service for the delegate branch
    #[must_use]
    pub fn asset_service(mut self, service: Arc<dyn AssetService>) -> Self {
        self.config.asset_service = Some(service);
        self
    }

    /// Freeze the configuration
    ///
    /// An instance name left empty by the setters falls back to
    /// [`registry::DEFAULT_INSTANCE`].
    #[must_use]
    pub fn build(mut self) -> ExplorerConfig {
        if self.config.instance_name.is_empty() {
            self.config.instance_name = registry::DEFAULT_INSTANCE.to_string();
        }
        self.config
    }
}
