//! Directory-backed asset service
//!
//! Default [`AssetService`] implementation serving the UI bundle from a
//! directory on disk.

use super::{AssetRequest, AssetService};
use crate::http::{self, cache, mime};
use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::fs;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Serves static assets from a root directory
///
/// The mount prefix is bound once from the first dispatched request and
/// stripped from incoming paths before they are resolved against the root.
#[derive(Debug)]
pub struct DirAssetServer {
    root: PathBuf,
    prefix: OnceLock<String>,
}

impl DirAssetServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: OnceLock::new(),
        }
    }

    /// Mount prefix bound from the first request, if any yet
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.get().map(String::as_str)
    }

    /// Resolve a request path to asset bytes and a content type
    async fn load(&self, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
        let relative = self
            .prefix
            .get()
            .and_then(|prefix| request_path.strip_prefix(prefix.as_str()))
            .unwrap_or(request_path);

        // Remove leading slash and prevent directory traversal
        let clean_path = relative.trim_start_matches('/').replace("..", "");
        if clean_path.is_empty() {
            return None;
        }

        let file_path = self.root.join(&clean_path);

        // Security: ensure file_path stays within the root
        let root_canonical = match self.root.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                log::warn!(
                    "asset root not found or inaccessible '{}': {e}",
                    self.root.display()
                );
                return None;
            }
        };

        // Missing assets are common (404), no need to log
        let Ok(file_canonical) = file_path.canonicalize() else {
            return None;
        };
        if !file_canonical.starts_with(&root_canonical) {
            log::warn!(
                "path traversal attempt blocked: {request_path} -> {}",
                file_canonical.display()
            );
            return None;
        }

        let content = match fs::read(&file_canonical).await {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to read asset '{}': {e}", file_canonical.display());
                return None;
            }
        };

        let content_type = content_type_of(&file_canonical);

        Some((content, content_type))
    }
}

#[async_trait]
impl AssetService for DirAssetServer {
    fn bind_prefix(&self, prefix: &str) {
        // First binding wins; later calls are ignored
        let _ = self.prefix.set(prefix.to_string());
    }

    async fn serve(&self, request: AssetRequest<'_>) -> Response<Full<Bytes>> {
        match self.load(request.path).await {
            Some((content, content_type)) => {
                let etag = cache::generate_etag(&content);
                if cache::check_etag_match(request.if_none_match, &etag) {
                    return http::build_304_response(&etag);
                }
                http::build_asset_response(Bytes::from(content), content_type, &etag)
            }
            None => http::build_404_response(),
        }
    }
}

/// Content type from the classifier table, with a byte-stream fallback for
/// everything the table leaves alone
fn content_type_of(path: &Path) -> &'static str {
    mime::content_type_for(path.extension().and_then(|e| e.to_str()))
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}
