//! Content-type classification module
//!
//! Maps a request path's file extension to the Content-Type header value the
//! dispatcher sets before branching.

/// Get the Content-Type for a file extension, using the explorer's fixed table.
///
/// Extensions outside the table (and missing extensions) yield `None`: no
/// header is set and the asset service or template renderer decides instead.
/// Extensions are matched case-sensitively, as given in the request path.
///
/// # Examples
/// ```
/// use swagger_explorer::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), Some("text/html; charset=utf-8"));
/// assert_eq!(content_type_for(Some("woff2")), None);
/// assert_eq!(content_type_for(None), None);
/// ```
pub fn content_type_for(extension: Option<&str>) -> Option<&'static str> {
    match extension {
        Some("html") => Some("text/html; charset=utf-8"),
        Some("css") => Some("text/css; charset=utf-8"),
        Some("js") => Some("application/javascript"),
        Some("png") => Some("image/png"),
        Some("json") => Some("application/json; charset=utf-8"),
        _ => None,
    }
}
