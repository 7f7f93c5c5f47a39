//! Error types for the renderer.

use storefront_core::CoreError;

use crate::config::ConfigError;

/// Renderer errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read catalog {path}")]
    ReadCatalog {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CoreError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
