//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Feature value cannot be coerced to the predicate's reference type
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// No child of an internal node matched and no fallback applied
    #[error("No matching branch in tree {tree} at node {node}")]
    NoMatchingBranch { tree: usize, node: String },

    /// Traversal ended on a node that has no score
    #[error("Node {node} in tree {tree} has no score")]
    MissingScore { tree: usize, node: String },

    /// A missing value was met under the nullPrediction strategy
    #[error("Missing value in tree {tree} at node {node} yields no prediction")]
    NullPrediction { tree: usize, node: String },

    /// Predicate cannot be evaluated as declared
    #[error("Invalid predicate: {0}")]
    InvalidPredicate(String),

    /// Score requested from a forest with no trees
    #[error("Cannot score an empty forest")]
    EmptyForest,

    /// A concurrent tree evaluation did not complete
    #[error("Tree evaluation task failed: {0}")]
    TaskFailed(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
