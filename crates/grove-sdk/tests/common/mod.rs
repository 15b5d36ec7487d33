//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use grove_sdk::{ExecutionMode, FeatureSet, Scorer, ScorerBuilder};
use std::path::PathBuf;

pub const FLOWERS: &str = include_str!("../fixtures/flowers.pmml");

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build a scorer over the flowers fixture
pub async fn flowers_scorer(mode: ExecutionMode) -> Scorer {
    ScorerBuilder::new()
        .with_model_content(FLOWERS)
        .with_execution_mode(mode)
        .build()
        .await
        .expect("flowers fixture should parse")
}

pub fn flower(petal_length: f64, color: &str) -> FeatureSet {
    FeatureSet::new()
        .with("petal_length", petal_length)
        .with("color", color)
}
