//! Error types for the template generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the template
#[derive(Error, Debug)]
pub enum Error {
    /// The imaging capability needed to produce the output is not available
    #[error("Imaging capability unavailable: {0}")]
    MissingCapability(String),

    /// The encoder rejected the canvas
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// The layout table could not be serialized
    #[error("Layout error: {0}")]
    Layout(String),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            image::ImageError::Unsupported(e) => Error::MissingCapability(e.to_string()),
            other => Error::Encode(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Layout(err.to_string())
    }
}
