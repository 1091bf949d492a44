//! Request dispatch module
//!
//! Entry point for explorer request processing, responsible for method
//! validation, one-time prefix discovery, content-type classification, and
//! dispatching to the entry page, document, redirect, or asset branches.

use crate::assets::{AssetRequest, AssetService, DirAssetServer};
use crate::config::ExplorerConfig;
use crate::handler::path;
use crate::http::{self, mime};
use crate::registry::DocumentRegistry;
use crate::render::{IndexPage, PageRenderer};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE, IF_NONE_MATCH};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Entry page path, claimed ahead of asset delegation
const INDEX_PAGE: &str = "index.html";
/// Description document path, claimed ahead of asset delegation
const DOCUMENT_PATH: &str = "doc.json";
/// Directory the default asset service serves the UI bundle from
const DEFAULT_ASSET_ROOT: &str = "swagger-ui";

/// Explorer request dispatcher
///
/// Owns one immutable [`ExplorerConfig`] and a mount-prefix cell resolved
/// from the first request; otherwise stateless across requests. Construct
/// once at setup time and share behind an `Arc` with the hosting server's
/// workers.
pub struct Explorer {
    config: ExplorerConfig,
    prefix: OnceLock<String>,
    assets: Arc<dyn AssetService>,
    registry: Arc<dyn DocumentRegistry>,
    renderer: Arc<dyn PageRenderer>,
}

impl Explorer {
    /// Create a dispatcher over `config`, fetching documents from `registry`
    ///
    /// When the configuration carries no asset-service override, the UI
    /// bundle is served from the `swagger-ui` directory next to the process.
    pub fn new(config: ExplorerConfig, registry: Arc<dyn DocumentRegistry>) -> Self {
        let assets = config
            .asset_service
            .clone()
            .unwrap_or_else(|| Arc::new(DirAssetServer::new(DEFAULT_ASSET_ROOT)));

        Self {
            config,
            prefix: OnceLock::new(),
            assets,
            registry,
            renderer: Arc::new(IndexPage),
        }
    }

    /// Replace the entry page renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Mount prefix observed from the first request, if any yet
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.get().map(String::as_str)
    }

    /// Main entry point for explorer request handling
    ///
    /// Suitable for `hyper::service::service_fn` under any mount prefix; the
    /// request body is never read.
    pub async fn handle<B>(&self, req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
        // 1. Check HTTP method
        if req.method() != Method::GET {
            log::warn!("method not allowed: {}", req.method());
            return Ok(http::build_405_response());
        }

        // 2. Resolve prefix and relative path from the raw URI
        let raw_uri = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.uri().path(), hyper::http::uri::PathAndQuery::as_str);
        let resolved = path::resolve_request_path(raw_uri);

        // 3. Latch the mount prefix from the first request and hand it to
        //    the asset service. The cell runs the closure at most once;
        //    concurrent first requests all observe the same finished value.
        let prefix = self.prefix.get_or_init(|| {
            self.assets.bind_prefix(&resolved.prefix);
            resolved.prefix.clone()
        });

        // 4. Classify a content-type hint from the file extension
        let hint = mime::content_type_for(extension_of(&resolved.relative));

        // 5. Dispatch on the relative path
        let response = match resolved.relative.as_str() {
            INDEX_PAGE => self.render_index(),
            DOCUMENT_PATH => self.fetch_document(hint),
            "" => http::build_redirect_response(&format!("{prefix}{INDEX_PAGE}")),
            _ => self.delegate(&req, hint).await,
        };

        Ok(response)
    }

    /// Render the entry page with the configuration as its data context
    fn render_index(&self) -> Response<Full<Bytes>> {
        match self.renderer.render(&self.config) {
            Ok(page) => http::build_html_response(page),
            Err(err) => {
                log::error!("entry page rendering failed: {err}");
                http::build_500_response()
            }
        }
    }

    /// Fetch the description document and emit its raw bytes
    fn fetch_document(&self, content_type: Option<&'static str>) -> Response<Full<Bytes>> {
        match self.registry.fetch(&self.config.instance_name) {
            Ok(doc) => http::build_document_response(doc, content_type),
            Err(err) => {
                log::error!(
                    "description document unavailable for instance '{}': {err}",
                    self.config.instance_name
                );
                http::build_500_response()
            }
        }
    }

    /// Delegate everything else to the asset service
    ///
    /// The classified content type is pre-set onto the delegated response
    /// when the asset service left none of its own.
    async fn delegate<B>(
        &self,
        req: &Request<B>,
        hint: Option<&'static str>,
    ) -> Response<Full<Bytes>> {
        let request = AssetRequest {
            path: req.uri().path(),
            if_none_match: req
                .headers()
                .get(IF_NONE_MATCH)
                .and_then(|v| v.to_str().ok()),
        };

        let mut response = self.assets.serve(request).await;

        if let Some(content_type) = hint {
            response
                .headers_mut()
                .entry(CONTENT_TYPE)
                .or_insert_with(|| HeaderValue::from_static(content_type));
        }

        response
    }
}

/// File extension of the relative path, case as given
fn extension_of(relative: &str) -> Option<&str> {
    Path::new(relative).extension().and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{InMemoryRegistry, DEFAULT_INSTANCE};
    use crate::render::RenderError;
    use async_trait::async_trait;
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Asset service that records prefix bindings and echoes served paths
    #[derive(Debug, Default)]
    struct RecordingAssets {
        bound: OnceLock<String>,
        bind_calls: AtomicUsize,
        set_content_type: Option<&'static str>,
    }

    #[async_trait]
    impl AssetService for RecordingAssets {
        fn bind_prefix(&self, prefix: &str) {
            self.bind_calls.fetch_add(1, Ordering::SeqCst);
            let _ = self.bound.set(prefix.to_string());
        }

        async fn serve(&self, request: AssetRequest<'_>) -> Response<Full<Bytes>> {
            let mut builder = Response::builder().status(200);
            if let Some(content_type) = self.set_content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
            builder
                .body(Full::new(Bytes::from(format!("asset:{}", request.path))))
                .unwrap()
        }
    }

    struct FailingRenderer;

    impl PageRenderer for FailingRenderer {
        fn render(&self, _config: &ExplorerConfig) -> Result<String, RenderError> {
            Err(RenderError::Template("boom".to_string()))
        }
    }

    fn registry_with_doc() -> Arc<InMemoryRegistry> {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(DEFAULT_INSTANCE, &br#"{"swagger":"2.0"}"#[..]);
        registry
    }

    fn explorer_with(config: ExplorerConfig, registry: Arc<InMemoryRegistry>) -> Explorer {
        Explorer::new(config, registry)
    }

    fn explorer() -> (Explorer, Arc<RecordingAssets>) {
        let assets = Arc::new(RecordingAssets::default());
        let config = ExplorerConfig::builder()
            .asset_service(Arc::clone(&assets) as Arc<dyn AssetService>)
            .build();
        (explorer_with(config, registry_with_doc()), assets)
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().method("GET").uri(uri).body(()).unwrap()
    }

    async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_non_get_is_405() {
        let (explorer, _assets) = explorer();
        let req = Request::builder()
            .method("POST")
            .uri("/api/docs/index.html")
            .body(())
            .unwrap();

        let resp = explorer.handle(req).await.unwrap();
        assert_eq!(resp.status(), 405);
        assert_eq!(&body_of(resp).await[..], b"Method not allowed");
    }

    #[tokio::test]
    async fn test_bare_prefix_redirects_to_index() {
        let (explorer, _assets) = explorer();

        let resp = explorer.handle(get("/api/docs/")).await.unwrap();
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/api/docs/index.html");
    }

    #[tokio::test]
    async fn test_index_reflects_configuration() {
        let assets = Arc::new(RecordingAssets::default());
        let config = ExplorerConfig::builder()
            .doc_expansion("full")
            .deep_linking(false)
            .asset_service(Arc::clone(&assets) as Arc<dyn AssetService>)
            .build();
        let explorer = explorer_with(config, registry_with_doc());

        let resp = explorer.handle(get("/api/docs/index.html")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()[CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = body_of(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains(r#"docExpansion: "full""#));
        assert!(page.contains("deepLinking: false"));
    }

    #[tokio::test]
    async fn test_document_bytes_are_emitted_raw() {
        let (explorer, _assets) = explorer();

        let resp = explorer.handle(get("/api/docs/doc.json")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()[CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(&body_of(resp).await[..], br#"{"swagger":"2.0"}"#);
    }

    #[tokio::test]
    async fn test_missing_document_is_generic_500() {
        let assets = Arc::new(RecordingAssets::default());
        let config = ExplorerConfig::builder()
            .asset_service(Arc::clone(&assets) as Arc<dyn AssetService>)
            .build();
        let explorer = explorer_with(config, Arc::new(InMemoryRegistry::new()));

        let resp = explorer.handle(get("/api/docs/doc.json")).await.unwrap();
        assert_eq!(resp.status(), 500);

        let body = body_of(resp).await;
        assert!(!body.is_empty());
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(text, "Internal Server Error");
        // The underlying registry error is logged, never echoed
        assert!(!text.contains("no document registered"));
    }

    #[tokio::test]
    async fn test_render_failure_is_500() {
        let (explorer, _assets) = explorer();
        let explorer = explorer.with_renderer(Arc::new(FailingRenderer));

        let resp = explorer.handle(get("/api/docs/index.html")).await.unwrap();
        assert_eq!(resp.status(), 500);
    }

    #[tokio::test]
    async fn test_unknown_path_is_delegated_with_content_type_hint() {
        let (explorer, _assets) = explorer();

        let resp = explorer.handle(get("/api/docs/foo.css")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()[CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        assert_eq!(&body_of(resp).await[..], b"asset:/api/docs/foo.css");
    }

    #[tokio::test]
    async fn test_delegate_keeps_its_own_content_type() {
        let assets = Arc::new(RecordingAssets {
            set_content_type: Some("text/css"),
            ..RecordingAssets::default()
        });
        let config = ExplorerConfig::builder()
            .asset_service(Arc::clone(&assets) as Arc<dyn AssetService>)
            .build();
        let explorer = explorer_with(config, registry_with_doc());

        let resp = explorer.handle(get("/api/docs/foo.css")).await.unwrap();
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn test_delegated_paths_without_table_extension_get_no_hint() {
        let (explorer, _assets) = explorer();

        let resp = explorer
            .handle(get("/api/docs/swagger-ui.css.map"))
            .await
            .unwrap();
        assert!(!resp.headers().contains_key(CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_prefix_is_latched_exactly_once_under_concurrency() {
        let (explorer, assets) = explorer();
        let explorer = Arc::new(explorer);

        let mut handles = Vec::new();
        for i in 0..32 {
            let explorer = Arc::clone(&explorer);
            handles.push(tokio::spawn(async move {
                let uri = format!("/api/docs/asset-{i}.js");
                explorer.handle(get(&uri)).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(assets.bind_calls.load(Ordering::SeqCst), 1);
        assert_eq!(assets.bound.get().map(String::as_str), Some("/api/docs/"));
        assert_eq!(explorer.prefix(), Some("/api/docs/"));
    }

    #[tokio::test]
    async fn test_later_requests_do_not_rebind_the_prefix() {
        let (explorer, assets) = explorer();

        explorer.handle(get("/api/docs/foo.css")).await.unwrap();
        explorer.handle(get("/other/place/bar.css")).await.unwrap();

        assert_eq!(assets.bind_calls.load(Ordering::SeqCst), 1);
        assert_eq!(explorer.prefix(), Some("/api/docs/"));

        // The redirect branch keeps using the latched prefix
        let resp = explorer.handle(get("/somewhere/else/")).await.unwrap();
        assert_eq!(resp.headers()["Location"], "/api/docs/index.html");
    }

    #[tokio::test]
    async fn test_query_string_does_not_change_dispatch() {
        let (explorer, _assets) = explorer();

        let resp = explorer
            .handle(get("/api/docs/doc.json?version=2"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(&body_of(resp).await[..], br#"{"swagger":"2.0"}"#);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let (explorer, _assets) = explorer();

        let first = body_of(explorer.handle(get("/api/docs/index.html")).await.unwrap()).await;
        let second = body_of(explorer.handle(get("/api/docs/index.html")).await.unwrap()).await;
        assert_eq!(first, second);

        let first = body_of(explorer.handle(get("/api/docs/doc.json")).await.unwrap()).await;
        let second = body_of(explorer.handle(get("/api/docs/doc.json")).await.unwrap()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_registry_failure_does_not_poison_the_latch() {
        let assets = Arc::new(RecordingAssets::default());
        let config = ExplorerConfig::builder()
            .asset_service(Arc::clone(&assets) as Arc<dyn AssetService>)
            .build();
        let registry = Arc::new(InMemoryRegistry::new());
        let explorer = explorer_with(config, Arc::clone(&registry));

        let resp = explorer.handle(get("/api/docs/doc.json")).await.unwrap();
        assert_eq!(resp.status(), 500);

        // Prefix was still latched by the failing request; a later register
        // makes the same request succeed
        assert_eq!(explorer.prefix(), Some("/api/docs/"));
        registry.register(DEFAULT_INSTANCE, &b"{}"[..]);
        let resp = explorer.handle(get("/api/docs/doc.json")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("index.html"), Some("html"));
        assert_eq!(extension_of("swagger-ui.css.map"), Some("map"));
        assert_eq!(extension_of("no-extension"), None);
        assert_eq!(extension_of(""), None);
    }
}
