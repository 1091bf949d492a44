// Configuration module entry point
// Holds the explorer's immutable runtime options

mod types;

// Re-export public types
pub use types::{ExplorerConfig, ExplorerConfigBuilder};
