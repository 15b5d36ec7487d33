//! Grove Runtime - Scoring engine for PMML random forests
//!
//! This crate walks decision trees against a feature set and aggregates the
//! leaf values of a forest into label votes, sequentially or with one tokio
//! task per tree.

pub mod engine;
pub mod error;
pub mod forest;
pub mod result;

// Re-export main types
pub use engine::{evaluate, Truth, TreeWalker};
pub use error::{Result, RuntimeError};
pub use forest::ForestEvaluator;
pub use result::{LabelScores, TraversalTrace};
