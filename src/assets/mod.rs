//! Static asset service module
//!
//! Trait seam for the collaborator that serves the UI bundle's files
//! (scripts, styles, images) for every path the dispatcher does not claim
//! itself.

mod dir;

pub use dir::DirAssetServer;

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// The slice of an incoming request the asset service needs
#[derive(Debug, Clone)]
pub struct AssetRequest<'a> {
    /// Full request path, including the mount prefix
    pub path: &'a str,
    /// Client cache validator, if one was sent
    pub if_none_match: Option<&'a str>,
}

/// Serves the UI bundle's static files under a discovered mount prefix
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Bind the mount prefix discovered from the first request
    ///
    /// The dispatcher calls this exactly once per lifetime; implementations
    /// must ignore any later call so a bound prefix is never torn or
    /// replaced.
    fn bind_prefix(&self, prefix: &str);

    /// Serve a request for a path the dispatcher did not claim
    ///
    /// Owns all further response behavior: 404s for missing assets, cache
    /// headers, and byte delivery.
    async fn serve(&self, request: AssetRequest<'_>) -> Response<Full<Bytes>>;
}
