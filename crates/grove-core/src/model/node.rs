//! Tree nodes

use crate::model::predicate::Predicate;
use serde::{Deserialize, Serialize};

/// Tree vertex.
///
/// A node without children is a leaf and is expected to carry a score.
/// Internal nodes may carry one too, which the `lastPrediction` and
/// `returnLastPrediction` strategies fall back on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Optional node identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Predicate deciding whether traversal enters this node; absent means always true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,

    /// Score value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Id of the child taken when a predicate cannot be evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_child: Option<String>,

    /// Ordered children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node carrying a score
    pub fn leaf(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }

    /// Create an internal node
    pub fn branch(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_default_child(mut self, id: impl Into<String>) -> Self {
        self.default_child = Some(id.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a direct child by id, along with its position
    pub fn child(&self, id: &str) -> Option<(usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .find(|(_, child)| child.id.as_deref() == Some(id))
    }
}
