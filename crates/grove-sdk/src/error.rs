//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Model document could not be decoded
    #[error("Parser error: {0}")]
    ParseError(#[from] grove_parser::ParseError),

    /// Scoring failed
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] grove_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid YAML configuration
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
