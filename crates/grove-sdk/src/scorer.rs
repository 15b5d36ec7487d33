//! Scorer facade
//!
//! Owns a parsed forest and routes scoring calls to the sequential or the
//! concurrent aggregator, depending on the configured execution mode.

use crate::config::{ExecutionMode, ScorerConfig};
use crate::error::Result;
use grove_core::{FeatureSet, RandomForest};
use grove_runtime::{ForestEvaluator, LabelScores};
use std::sync::Arc;
use std::time::Instant;

/// Scores feature sets against a loaded random forest
#[derive(Debug, Clone)]
pub struct Scorer {
    evaluator: ForestEvaluator,
    config: ScorerConfig,
}

impl Scorer {
    /// Create a scorer over an already parsed forest
    pub fn new(forest: impl Into<Arc<RandomForest>>, config: ScorerConfig) -> Self {
        let mut evaluator = ForestEvaluator::new(forest);
        if let Some(limit) = config.max_concurrency {
            evaluator = evaluator.with_max_concurrency(limit);
        }
        Self { evaluator, config }
    }

    pub fn forest(&self) -> &Arc<RandomForest> {
        self.evaluator.forest()
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.config.execution_mode
    }

    /// Tally leaf values across all trees
    pub async fn label_scores(&self, features: FeatureSet) -> Result<LabelScores> {
        match self.config.execution_mode {
            ExecutionMode::Sequential => self.label_scores_sequential(&features),
            ExecutionMode::Concurrent => self.label_scores_concurrently(Arc::new(features)).await,
        }
    }

    /// Vote share of `label`
    pub async fn score(&self, features: FeatureSet, label: &str) -> Result<f64> {
        Ok(self.label_scores(features).await?.probability(label)?)
    }

    pub fn label_scores_sequential(&self, features: &FeatureSet) -> Result<LabelScores> {
        let start = Instant::now();
        let tally = self.evaluator.label_scores(features)?;
        self.log_timing("sequential", &tally, start);
        Ok(tally)
    }

    pub fn score_sequential(&self, features: &FeatureSet, label: &str) -> Result<f64> {
        Ok(self.label_scores_sequential(features)?.probability(label)?)
    }

    pub async fn label_scores_concurrently(
        &self,
        features: Arc<FeatureSet>,
    ) -> Result<LabelScores> {
        let start = Instant::now();
        let tally = self.evaluator.label_scores_concurrently(features).await?;
        self.log_timing("concurrent", &tally, start);
        Ok(tally)
    }

    pub async fn score_concurrently(&self, features: Arc<FeatureSet>, label: &str) -> Result<f64> {
        Ok(self
            .label_scores_concurrently(features)
            .await?
            .probability(label)?)
    }

    fn log_timing(&self, mode: &str, tally: &LabelScores, start: Instant) {
        if self.config.enable_tracing {
            tracing::info!(
                "Scored {} trees ({}) into {} labels in {:?}",
                self.forest().len(),
                mode,
                tally.len(),
                start.elapsed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_core::{ComparisonOperator, Node, Predicate};
    use grove_runtime::RuntimeError;

    fn forest() -> RandomForest {
        let tree = |threshold: f64| {
            Node::branch(vec![
                Node::leaf(1.0).with_predicate(Predicate::simple(
                    "x",
                    ComparisonOperator::LessThan,
                    threshold,
                )),
                Node::leaf(0.0).with_predicate(Predicate::True),
            ])
        };
        RandomForest::from_roots(vec![tree(1.0), tree(2.0), tree(3.0)])
    }

    #[tokio::test]
    async fn test_modes_agree() {
        let features = FeatureSet::new().with("x", 1.5);

        let sequential = Scorer::new(forest(), ScorerConfig::new());
        let concurrent = Scorer::new(
            forest(),
            ScorerConfig::new()
                .with_execution_mode(ExecutionMode::Concurrent)
                .with_max_concurrency(2),
        );

        let a = sequential.label_scores(features.clone()).await.unwrap();
        let b = concurrent.label_scores(features.clone()).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get("1"), 2.0);

        let score = concurrent.score(features, "0").await.unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_sequential() {
        let scorer = Scorer::new(forest(), ScorerConfig::new().enable_tracing(true));
        let features = FeatureSet::new().with("x", 0.0);

        assert_eq!(scorer.score_sequential(&features, "1").unwrap(), 1.0);
        assert_eq!(scorer.score_sequential(&features, "0").unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_empty_forest() {
        let scorer = Scorer::new(RandomForest::default(), ScorerConfig::new());
        let result = scorer.score(FeatureSet::new(), "1").await;

        assert!(matches!(
            result,
            Err(crate::SdkError::RuntimeError(RuntimeError::EmptyForest))
        ));
    }
}
