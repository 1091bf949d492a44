//! HTTP protocol layer module
//!
//! Provides HTTP-level base functionality shared by the dispatcher and the
//! default asset service, decoupled from dispatch logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_asset_response, build_document_response, build_html_response, build_redirect_response,
};
