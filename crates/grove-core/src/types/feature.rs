//! Feature sets supplied for scoring

use crate::error::Result;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to value mapping scored against a forest.
///
/// A field bound to [`Value::Missing`] is indistinguishable from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    fields: HashMap<String, Value>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a present, non-missing field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_missing())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a feature set from a JSON object.
    ///
    /// Values must be numbers, strings, booleans or null. Booleans become
    /// the text `"true"` or `"false"`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<HashMap<String, Value>> for FeatureSet {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_absent() {
        let features = FeatureSet::new()
            .with("age", 30.0)
            .with("income", Value::Missing);

        assert!(features.contains("age"));
        assert!(!features.contains("income"));
        assert!(!features.contains("zip"));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let features: FeatureSet = vec![("a", Value::Number(1.0)), ("b", Value::text("x"))]
            .into_iter()
            .collect();

        assert_eq!(features.get("a"), Some(&Value::Number(1.0)));
        assert_eq!(features.get("b"), Some(&Value::text("x")));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"sepal_length": 5.1, "species": "setosa", "petal": null}"#;
        let features = FeatureSet::from_json_str(json).unwrap();

        assert_eq!(features.get("sepal_length"), Some(&Value::Number(5.1)));
        assert_eq!(features.get("species"), Some(&Value::text("setosa")));
        assert!(!features.contains("petal"));
    }

    #[test]
    fn test_from_json_booleans_are_text() {
        let features = FeatureSet::from_json_str(r#"{"flag": true, "other": false}"#).unwrap();
        assert_eq!(features.get("flag"), Some(&Value::text("true")));
        assert_eq!(features.get("other"), Some(&Value::text("false")));
    }

    #[test]
    fn test_from_json_rejects_nested() {
        let result = FeatureSet::from_json_str(r#"{"a": [1, 2]}"#);
        assert!(result.is_err());
    }
}
