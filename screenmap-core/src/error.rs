//! Error types for screenmap operations

use thiserror::Error;

/// screenmap Error types
#[derive(Error, Debug)]
pub enum ScreenmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for screenmap operations
pub type Result<T> = std::result::Result<T, ScreenmapError>;

impl From<serde_json::Error> for ScreenmapError {
    fn from(e: serde_json::Error) -> Self {
        ScreenmapError::Serialization(e.to_string())
    }
}
