//! Error types for Grove Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid feature set: {0}")]
    InvalidFeatureSet(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
