//! Document registry module
//!
//! Maps instance names to generated API description documents. The
//! dispatcher's document branch consumes this through the
//! [`DocumentRegistry`] trait; [`InMemoryRegistry`] is the bundled
//! implementation the common embedding path registers its documents into.

use hyper::body::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use thiserror::Error;

/// Instance name used when the configuration leaves one unset
pub const DEFAULT_INSTANCE: &str = "swagger";

/// Failure fetching a description document
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no document registered under instance '{name}'")]
    NotFound { name: String },
    #[error("document generation failed: {0}")]
    Generation(String),
}

/// Source of description documents, keyed by instance name
///
/// Implementations must be safe for concurrent fetches of distinct and
/// identical names.
pub trait DocumentRegistry: Send + Sync {
    /// Fetch the description document registered under `name`
    fn fetch(&self, name: &str) -> Result<Bytes, RegistryError>;
}

/// In-memory registry of description documents
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    docs: RwLock<HashMap<String, Bytes>>,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared registry
    ///
    /// Convenience instance for embedders whose generated documents register
    /// themselves at startup. Anything needing a substitutable registry
    /// should construct its own and inject it into the dispatcher instead.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<InMemoryRegistry>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Register (or replace) the document stored under `name`
    pub fn register(&self, name: impl Into<String>, doc: impl Into<Bytes>) {
        match self.docs.write() {
            Ok(mut docs) => {
                docs.insert(name.into(), doc.into());
            }
            Err(e) => log::error!("document registry lock poisoned on register: {e}"),
        }
    }
}

impl DocumentRegistry for InMemoryRegistry {
    fn fetch(&self, name: &str) -> Result<Bytes, RegistryError> {
        let docs = self
            .docs
            .read()
            .map_err(|e| RegistryError::Generation(format!("registry lock poisoned: {e}")))?;

        docs.get(name).cloned().ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
    }
}
