//! Traversal tracing types

use serde::{Deserialize, Serialize};

/// Record of a single tree traversal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalTrace {
    /// Index of the traversed tree in its forest
    pub tree: usize,

    /// Child positions taken from the root
    pub path: Vec<usize>,

    /// Number of predicates evaluated
    pub evaluations: usize,

    /// Score of the node the traversal ended on
    pub score: f64,
}

impl TraversalTrace {
    pub fn new(tree: usize) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// Render the current node position as `root/1/0`
    pub fn position(&self) -> String {
        let mut position = String::from("root");
        for step in &self.path {
            position.push('/');
            position.push_str(&step.to_string());
        }
        position
    }
}
