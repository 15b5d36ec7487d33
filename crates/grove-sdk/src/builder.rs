//! Builder pattern for Scorer

use crate::config::{ExecutionMode, ScorerConfig};
use crate::error::{Result, SdkError};
use crate::scorer::Scorer;
use grove_parser::PmmlParser;
use std::path::PathBuf;

/// Builder for Scorer
///
/// # Example
///
/// ```rust,ignore
/// use grove_sdk::{ExecutionMode, ScorerBuilder};
///
/// let scorer = ScorerBuilder::new()
///     .with_model_file("models/forest.pmml")
///     .with_execution_mode(ExecutionMode::Concurrent)
///     .build()
///     .await?;
/// ```
pub struct ScorerBuilder {
    config: ScorerConfig,
}

impl ScorerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::new(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Set the PMML model file
    pub fn with_model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_file = Some(path.into());
        self
    }

    /// Set PMML content directly (alternative to file path)
    pub fn with_model_content(mut self, content: impl Into<String>) -> Self {
        self.config.model_content = Some(content.into());
        self
    }

    /// Set the execution mode
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Bound concurrent tree traversal
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.config.max_concurrency = Some(limit);
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config.enable_tracing = enable;
        self
    }

    /// Build the scorer
    ///
    /// Inline model content takes precedence over the model file.
    pub async fn build(self) -> Result<Scorer> {
        let forest = match (&self.config.model_content, &self.config.model_file) {
            (Some(content), _) => PmmlParser::parse(content)?,
            (None, Some(path)) => {
                tracing::debug!("Loading model from {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                PmmlParser::parse(&content)?
            }
            (None, None) => {
                return Err(SdkError::ConfigError(
                    "No model file or model content configured".to_string(),
                ))
            }
        };

        if self.config.enable_tracing {
            tracing::info!(
                "Loaded forest with {} trees ({:?} mode)",
                forest.len(),
                self.config.execution_mode
            );
        }

        Ok(Scorer::new(forest, self.config))
    }
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_TREE: &str = r#"
<PMML version="4.2">
  <TreeModel functionName="classification">
    <Node id="1"><True/>
      <Node id="2" score="1"><SimplePredicate field="x" operator="lessThan" value="5"/></Node>
      <Node id="3" score="0"><True/></Node>
    </Node>
  </TreeModel>
</PMML>"#;

    #[tokio::test]
    async fn test_builder_from_content() {
        let scorer = ScorerBuilder::new()
            .with_model_content(SINGLE_TREE)
            .enable_tracing(true)
            .build()
            .await;

        assert!(scorer.is_ok());
        assert_eq!(scorer.unwrap().forest().len(), 1);
    }

    #[tokio::test]
    async fn test_builder_without_model() {
        let result = ScorerBuilder::new().build().await;
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_builder_missing_file() {
        let result = ScorerBuilder::new()
            .with_model_file("does/not/exist.pmml")
            .build()
            .await;
        assert!(matches!(result, Err(SdkError::IoError(_))));
    }

    #[test]
    fn test_builder_with_multiple_options() {
        let builder = ScorerBuilder::new()
            .with_model_file("forest.pmml")
            .with_execution_mode(ExecutionMode::Concurrent)
            .with_max_concurrency(2)
            .enable_tracing(false);

        assert_eq!(builder.config.execution_mode, ExecutionMode::Concurrent);
        assert_eq!(builder.config.max_concurrency, Some(2));
        assert!(!builder.config.enable_tracing);
    }
}
