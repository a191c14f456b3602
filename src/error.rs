//! Error types for the pattern synthesizer

use thiserror::Error;

/// Result type alias for pattern operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering a pattern
///
/// Synthesizing a grid from a string never fails; every variant here comes
/// from configuration or from the rendering side.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (module count, size, malformed config file)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render a grid
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to read a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a config file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
