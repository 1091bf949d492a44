//! Request handler module
//!
//! Responsible for resolving request paths and dispatching to the entry
//! page, document, redirect, or asset-delegation branches.

mod dispatcher;
pub mod path;

// Re-export main entry point
pub use dispatcher::Explorer;
