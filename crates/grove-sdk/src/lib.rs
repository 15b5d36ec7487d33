//! Grove SDK
//!
//! High-level API for loading PMML random forests and scoring feature sets
//! against them.

pub mod builder;
pub mod config;
pub mod error;
pub mod scorer;

// Re-export main types
pub use builder::ScorerBuilder;
pub use config::{ExecutionMode, ScorerConfig};
pub use error::{Result, SdkError};
pub use scorer::Scorer;

// Re-export commonly used types from dependencies
pub use grove_core::{FeatureSet, RandomForest, Value};
pub use grove_runtime::LabelScores;
