//! Configuration types for Scorer

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// PMML model file path
    pub model_file: Option<PathBuf>,

    /// PMML document content - alternative to file path
    #[serde(skip)]
    pub model_content: Option<String>,

    /// How trees are traversed per call
    pub execution_mode: ExecutionMode,

    /// Upper bound on trees traversed at once in concurrent mode
    pub max_concurrency: Option<usize>,

    /// Log per-call timings
    pub enable_tracing: bool,
}

impl ScorerConfig {
    /// Create a new scorer configuration
    pub fn new() -> Self {
        Self {
            model_file: None,
            model_content: None,
            execution_mode: ExecutionMode::default(),
            max_concurrency: None,
            enable_tracing: false,
        }
    }

    /// Load a configuration from YAML
    ///
    /// Keys left out of the document keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the model file
    pub fn with_model_file(mut self, path: PathBuf) -> Self {
        self.model_file = Some(path);
        self
    }

    /// Set the model content
    pub fn with_model_content(mut self, content: String) -> Self {
        self.model_content = Some(content);
        self
    }

    /// Set the execution mode
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    /// Bound concurrent tree traversal
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit);
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Concurrent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_config_builder() {
        let config = ScorerConfig::new()
            .with_model_file(PathBuf::from("forest.pmml"))
            .with_execution_mode(ExecutionMode::Concurrent)
            .with_max_concurrency(8)
            .enable_tracing(true);

        assert_eq!(config.model_file, Some(PathBuf::from("forest.pmml")));
        assert_eq!(config.execution_mode, ExecutionMode::Concurrent);
        assert_eq!(config.max_concurrency, Some(8));
        assert!(config.enable_tracing);
    }

    #[test]
    fn test_defaults() {
        let config = ScorerConfig::default();
        assert!(config.model_file.is_none());
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
model_file: models/forest.pmml
execution_mode: concurrent
max_concurrency: 4
"#;
        let config = ScorerConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.model_file, Some(PathBuf::from("models/forest.pmml")));
        assert_eq!(config.execution_mode, ExecutionMode::Concurrent);
        assert_eq!(config.max_concurrency, Some(4));
        assert!(!config.enable_tracing);
        assert!(config.model_content.is_none());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_mode() {
        let result = ScorerConfig::from_yaml("execution_mode: parallel");
        assert!(matches!(result, Err(crate::SdkError::YamlError(_))));
    }
}
