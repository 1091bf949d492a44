//! Embeddable API-documentation explorer handler
//!
//! Serves an interactive, browser-based explorer for a machine-readable API
//! description document. Mount [`Explorer::handle`] under any URL prefix of
//! the embedding application's server; the handler renders the configured
//! entry page, emits the description document, redirects bare-prefix
//! requests, and delegates everything else to a static asset service holding
//! the UI bundle.
//!
//! The mount prefix is discovered from the first request rather than
//! configured: the embedding application chooses it when registering the
//! route, and it is constant thereafter.
//!
//! ```no_run
//! use std::sync::Arc;
//! use swagger_explorer::{Explorer, ExplorerConfig, InMemoryRegistry};
//!
//! let registry = InMemoryRegistry::shared();
//! registry.register("swagger", &br#"{"swagger":"2.0","paths":{}}"#[..]);
//!
//! let config = ExplorerConfig::builder()
//!     .doc_expansion("full")
//!     .build();
//! let explorer = Arc::new(Explorer::new(config, registry));
//! // hand `explorer` to the server, e.g. inside hyper's `service_fn`:
//! // service_fn(move |req| { let e = Arc::clone(&explorer); async move { e.handle(req).await } })
//! ```

pub mod assets;
pub mod config;
pub mod handler;
pub mod http;
pub mod registry;
pub mod render;

pub use assets::{AssetRequest, AssetService, DirAssetServer};
pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use handler::Explorer;
pub use registry::{DocumentRegistry, InMemoryRegistry, RegistryError, DEFAULT_INSTANCE};
pub use render::{IndexPage, PageRenderer, RenderError};
