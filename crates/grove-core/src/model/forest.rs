//! Trees and forests

use crate::error::CoreError;
use crate::model::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What traversal does when a child predicate evaluates to unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingValueStrategy {
    /// Treat the child as non-matching
    #[default]
    None,
    /// Descend into the node's declared default child
    DefaultChild,
    /// Return the score of the current node
    LastPrediction,
    /// Fail the traversal
    NullPrediction,
}

impl MissingValueStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingValueStrategy::None => "none",
            MissingValueStrategy::DefaultChild => "defaultChild",
            MissingValueStrategy::LastPrediction => "lastPrediction",
            MissingValueStrategy::NullPrediction => "nullPrediction",
        }
    }
}

impl FromStr for MissingValueStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MissingValueStrategy::None),
            "defaultChild" => Ok(MissingValueStrategy::DefaultChild),
            "lastPrediction" => Ok(MissingValueStrategy::LastPrediction),
            "nullPrediction" => Ok(MissingValueStrategy::NullPrediction),
            other => Err(CoreError::InvalidValue(format!(
                "unsupported missing value strategy '{}'",
                other
            ))),
        }
    }
}

/// What traversal does when no child predicate is true
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoTrueChildStrategy {
    /// Fail the traversal
    #[default]
    ReturnNullPrediction,
    /// Return the score of the current node when it has one
    ReturnLastPrediction,
}

impl NoTrueChildStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoTrueChildStrategy::ReturnNullPrediction => "returnNullPrediction",
            NoTrueChildStrategy::ReturnLastPrediction => "returnLastPrediction",
        }
    }
}

impl FromStr for NoTrueChildStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "returnNullPrediction" => Ok(NoTrueChildStrategy::ReturnNullPrediction),
            "returnLastPrediction" => Ok(NoTrueChildStrategy::ReturnLastPrediction),
            other => Err(CoreError::InvalidValue(format!(
                "unsupported no true child strategy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MissingValueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NoTrueChildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Position of the tree within its forest
    pub index: usize,

    /// Segment identifier from the model document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Root node
    pub root: Node,

    #[serde(default)]
    pub missing_value_strategy: MissingValueStrategy,

    #[serde(default)]
    pub no_true_child_strategy: NoTrueChildStrategy,
}

impl Tree {
    /// Create a tree with default strategies
    pub fn new(index: usize, root: Node) -> Self {
        Self {
            index,
            id: None,
            root,
            missing_value_strategy: MissingValueStrategy::default(),
            no_true_child_strategy: NoTrueChildStrategy::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_missing_value_strategy(mut self, strategy: MissingValueStrategy) -> Self {
        self.missing_value_strategy = strategy;
        self
    }

    pub fn with_no_true_child_strategy(mut self, strategy: NoTrueChildStrategy) -> Self {
        self.no_true_child_strategy = strategy;
        self
    }
}

/// Ordered collection of trees whose leaf values are tallied into votes.
///
/// Immutable once built; share it behind an `Arc` for concurrent scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<Tree>,
}

impl RandomForest {
    /// Create a forest, renumbering tree indices to match their positions
    pub fn new(trees: Vec<Tree>) -> Self {
        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(index, tree)| Tree { index, ..tree })
            .collect();
        Self { trees }
    }

    /// Create a forest from root nodes with default tree strategies
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self {
            trees: roots
                .into_iter()
                .enumerate()
                .map(|(index, root)| Tree::new(index, root))
                .collect(),
        }
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
