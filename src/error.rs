//! Error types for site generation

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, checking or serving the site
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (config file or manifest)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A CSS selector could not be parsed
    #[error("Invalid selector: {0}")]
    SelectorError(String),

    /// A URL (origin, document URL) could not be parsed
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// A form id that does not exist in the rendered document
    #[error("No form with id '{0}' in document")]
    UnknownForm(String),

    /// The preview server failed
    #[error("Preview server error: {0}")]
    ServeError(String),
}
