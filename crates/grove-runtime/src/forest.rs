//! Forest aggregation
//!
//! Runs the tree walker over every tree of a forest and tallies the leaf
//! values into label votes. The concurrent variants spawn one tokio task per
//! tree and join all of them before returning, on success and on failure.

use crate::engine::TreeWalker;
use crate::error::{Result, RuntimeError};
use crate::result::LabelScores;
use grove_core::{FeatureSet, RandomForest};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Scores feature sets against a shared forest
#[derive(Debug, Clone)]
pub struct ForestEvaluator {
    forest: Arc<RandomForest>,
    max_concurrency: Option<usize>,
}

impl ForestEvaluator {
    /// Create an evaluator with unbounded concurrency
    pub fn new(forest: impl Into<Arc<RandomForest>>) -> Self {
        Self {
            forest: forest.into(),
            max_concurrency: None,
        }
    }

    /// Bound the number of trees traversed at once by the concurrent variants.
    ///
    /// Zero means unbounded.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = (limit > 0).then_some(limit);
        self
    }

    pub fn forest(&self) -> &Arc<RandomForest> {
        &self.forest
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// Tally the leaf values of every tree.
    ///
    /// The first failing tree aborts the call.
    pub fn label_scores(&self, features: &FeatureSet) -> Result<LabelScores> {
        let start = Instant::now();
        let mut tally = LabelScores::new();

        for tree in self.forest.trees() {
            let score = TreeWalker::traverse(tree, features)?;
            tally.record(score);
        }

        tracing::debug!(
            "Scored {} trees into {} labels in {:?}",
            self.forest.len(),
            tally.len(),
            start.elapsed()
        );
        Ok(tally)
    }

    /// Vote share of `label` across the forest.
    ///
    /// A label no tree produced scores 0.0; an empty forest fails with
    /// `EmptyForest`.
    pub fn score(&self, features: &FeatureSet, label: &str) -> Result<f64> {
        self.label_scores(features)?.probability(label)
    }

    /// Same as [`Self::label_scores`], with one task per tree
    pub async fn label_scores_concurrently(
        &self,
        features: Arc<FeatureSet>,
    ) -> Result<LabelScores> {
        let start = Instant::now();
        let semaphore = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks = JoinSet::new();

        for index in 0..self.forest.len() {
            let forest = Arc::clone(&self.forest);
            let features = Arc::clone(&features);
            let semaphore = semaphore.clone();

            tasks.spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => Some(
                        semaphore
                            .acquire_owned()
                            .await
                            .map_err(|e| RuntimeError::TaskFailed(e.to_string()))?,
                    ),
                    None => None,
                };
                TreeWalker::traverse(&forest.trees()[index], &features)
            });
        }

        let tally = Self::drain(tasks).await?;

        tracing::debug!(
            "Scored {} trees concurrently into {} labels in {:?}",
            self.forest.len(),
            tally.len(),
            start.elapsed()
        );
        Ok(tally)
    }

    /// Join every task, keeping the first error observed.
    ///
    /// Results arriving after a failure are discarded.
    async fn drain(mut tasks: JoinSet<Result<f64>>) -> Result<LabelScores> {
        let mut tally = LabelScores::new();
        let mut first_error: Option<RuntimeError> = None;

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| RuntimeError::TaskFailed(e.to_string()))
                .and_then(|result| result);

            match outcome {
                Ok(score) => {
                    if first_error.is_none() {
                        tally.record(score);
                    }
                }
                Err(e) => {
                    if first_error.is_none() {
                        tracing::warn!(
                            "Tree evaluation failed, discarding remaining results: {}",
                            e
                        );
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(tally),
        }
    }

    /// Same as [`Self::score`], with one task per tree
    pub async fn score_concurrently(&self, features: Arc<FeatureSet>, label: &str) -> Result<f64> {
        self.label_scores_concurrently(features)
            .await?
            .probability(label)
    }
}
