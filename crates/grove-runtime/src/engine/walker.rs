//! Tree traversal
//!
//! Descends from the root into the first child whose predicate is true until
//! a leaf is reached. Unknown predicate results are handled according to the
//! tree's missing value strategy; a node where nothing matches is resolved by
//! its no-true-child strategy.

use crate::engine::predicate::{evaluate, Truth};
use crate::error::{Result, RuntimeError};
use crate::result::TraversalTrace;
use grove_core::{FeatureSet, MissingValueStrategy, NoTrueChildStrategy, Node, Tree};

/// Tree walker
pub struct TreeWalker;

impl TreeWalker {
    /// Traverse a tree and return the score it ends on
    pub fn traverse(tree: &Tree, features: &FeatureSet) -> Result<f64> {
        Self::trace(tree, features).map(|trace| trace.score)
    }

    /// Traverse a tree, recording the path taken
    pub fn trace(tree: &Tree, features: &FeatureSet) -> Result<TraversalTrace> {
        let mut trace = TraversalTrace::new(tree.index);
        let mut node = &tree.root;

        'descend: loop {
            if node.is_leaf() {
                trace.score = Self::node_score(tree, node, &trace)?;
                tracing::trace!(
                    tree = tree.index,
                    position = %trace.position(),
                    score = trace.score,
                    "Reached leaf"
                );
                return Ok(trace);
            }

            for (position, child) in node.children.iter().enumerate() {
                let truth = match &child.predicate {
                    Some(predicate) => {
                        trace.evaluations += 1;
                        evaluate(predicate, features).map_err(|e| {
                            tracing::debug!(
                                tree = tree.index,
                                node = child.id.as_deref().unwrap_or("-"),
                                position = %format!("{}/{}", trace.position(), position),
                                "Predicate evaluation failed: {}",
                                e
                            );
                            e
                        })?
                    }
                    None => Truth::True,
                };

                match truth {
                    Truth::True => {
                        trace.path.push(position);
                        node = child;
                        continue 'descend;
                    }
                    Truth::False => {}
                    Truth::Unknown => match tree.missing_value_strategy {
                        MissingValueStrategy::None => {}
                        MissingValueStrategy::DefaultChild => {
                            if let Some((position, default)) = Self::default_child(node) {
                                trace.path.push(position);
                                node = default;
                                continue 'descend;
                            }
                        }
                        MissingValueStrategy::LastPrediction => {
                            trace.score = Self::node_score(tree, node, &trace)?;
                            return Ok(trace);
                        }
                        MissingValueStrategy::NullPrediction => {
                            return Err(RuntimeError::NullPrediction {
                                tree: tree.index,
                                node: Self::node_label(node, &trace),
                            });
                        }
                    },
                }
            }

            return match (tree.no_true_child_strategy, node.score) {
                (NoTrueChildStrategy::ReturnLastPrediction, Some(score)) => {
                    trace.score = score;
                    Ok(trace)
                }
                _ => Err(RuntimeError::NoMatchingBranch {
                    tree: tree.index,
                    node: Self::node_label(node, &trace),
                }),
            };
        }
    }

    fn default_child(node: &Node) -> Option<(usize, &Node)> {
        node.child(node.default_child.as_deref()?)
    }

    fn node_score(tree: &Tree, node: &Node, trace: &TraversalTrace) -> Result<f64> {
        node.score.ok_or_else(|| RuntimeError::MissingScore {
            tree: tree.index,
            node: Self::node_label(node, trace),
        })
    }

    /// The node's id, or its position when it has none
    fn node_label(node: &Node, trace: &TraversalTrace) -> String {
        node.id.clone().unwrap_or_else(|| trace.position())
    }
}
