//! Error types for the mockup renderer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing the mockup
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to rasterize the display list
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// A font file could not be read or parsed. The font book recovers from
    /// this internally; it never reaches callers of `run`.
    #[error("Font unavailable at {path:?}: {reason}")]
    FontError { path: PathBuf, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Reading or writing a file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::RenderError(format!("display list serialization: {}", err))
    }
}
