//! Label vote tally

use crate::error::{Result, RuntimeError};
use grove_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-call mapping of canonical leaf values to the number of trees that
/// produced them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelScores {
    counts: BTreeMap<String, f64>,
}

impl LabelScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one vote for a leaf score
    pub fn record(&mut self, score: f64) {
        *self.counts.entry(Value::Number(score).canonical()).or_insert(0.0) += 1.0;
    }

    /// Vote count for a label, zero if no tree produced it
    pub fn get(&self, label: &str) -> f64 {
        self.counts.get(label).copied().unwrap_or(0.0)
    }

    /// Sum of all vote counts
    pub fn total(&self) -> f64 {
        self.counts.values().sum()
    }

    /// Vote share of a label.
    ///
    /// Fails with `EmptyForest` when no votes were recorded.
    pub fn probability(&self, label: &str) -> Result<f64> {
        let total = self.total();
        if total == 0.0 {
            return Err(RuntimeError::EmptyForest);
        }
        Ok(self.get(label) / total)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Labels and counts in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

impl FromIterator<f64> for LabelScores {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut tally = Self::new();
        for score in iter {
            tally.record(score);
        }
        tally
    }
}
