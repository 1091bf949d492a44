//! Request path resolution module
//!
//! Splits a raw request URI into the mount prefix and the relative path the
//! dispatcher branches on. Pure string functions, no I/O.

/// Prefix and relative path extracted from a raw request URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Everything up to and including the final path segment's slash
    pub prefix: String,
    /// The final segment, with query string and fragment stripped
    pub relative: String,
}

/// Split a raw request URI into mount prefix and relative path
///
/// The query string (from the first `?`) and fragment (from the first `#`)
/// are stripped before splitting, so `/docs/index.html?x=1` and
/// `/docs/index.html` resolve identically. A URI ending in a slash yields an
/// empty relative path, the canonical redirect case. A URI containing no
/// slash at all yields an empty prefix and the whole string as the relative
/// path.
///
/// # Examples
/// ```
/// use swagger_explorer::handler::path::resolve_request_path;
/// let resolved = resolve_request_path("/api/docs/doc.json?v=2");
/// assert_eq!(resolved.prefix, "/api/docs/");
/// assert_eq!(resolved.relative, "doc.json");
/// ```
pub fn resolve_request_path(raw_uri: &str) -> ResolvedPath {
    let end = raw_uri.find(['?', '#']).unwrap_or(raw_uri.len());
    let path = &raw_uri[..end];

    match path.rfind('/') {
        Some(idx) => ResolvedPath {
            prefix: path[..=idx].to_string(),
            relative: path[idx + 1..].to_string(),
        },
        None => ResolvedPath {
            prefix: String::new(),
            relative: path.to_string(),
        },
    }
}
