//! Grove Core - Model types for the Grove random forest scorer
//!
//! This crate provides the fundamental types shared by the parser, the
//! runtime and the SDK:
//! - Value and feature set types for scoring input
//! - Predicate, node, tree and forest definitions
//! - Error types

pub mod error;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use model::{
    BooleanOperator, ComparisonOperator, MissingValueStrategy, NoTrueChildStrategy, Node,
    Predicate, RandomForest, SetOperator, Tree,
};
pub use types::{FeatureSet, Value};
