//! Node predicates

use crate::model::operator::{BooleanOperator, ComparisonOperator, SetOperator};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Boolean test attached to a tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// Compare a field against a typed reference value
    Simple {
        field: String,
        operator: ComparisonOperator,
        value: Value,
    },
    /// Field is absent from the feature set
    IsMissing { field: String },
    /// Field is present in the feature set
    IsNotMissing { field: String },
    /// Field value is (or is not) one of a set of reference values
    SimpleSet {
        field: String,
        operator: SetOperator,
        values: Vec<Value>,
    },
    /// Boolean combination of child predicates
    Compound {
        operator: BooleanOperator,
        predicates: Vec<Predicate>,
    },
    True,
    False,
}

impl Predicate {
    /// Create a simple comparison predicate
    pub fn simple(
        field: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Self {
        Predicate::Simple {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn is_missing(field: impl Into<String>) -> Self {
        Predicate::IsMissing {
            field: field.into(),
        }
    }

    pub fn is_not_missing(field: impl Into<String>) -> Self {
        Predicate::IsNotMissing {
            field: field.into(),
        }
    }

    pub fn set(field: impl Into<String>, operator: SetOperator, values: Vec<Value>) -> Self {
        Predicate::SimpleSet {
            field: field.into(),
            operator,
            values,
        }
    }

    pub fn compound(operator: BooleanOperator, predicates: Vec<Predicate>) -> Self {
        Predicate::Compound {
            operator,
            predicates,
        }
    }

    pub fn and(predicates: Vec<Predicate>) -> Self {
        Self::compound(BooleanOperator::And, predicates)
    }

    pub fn or(predicates: Vec<Predicate>) -> Self {
        Self::compound(BooleanOperator::Or, predicates)
    }

    /// Field names referenced by this predicate, in declaration order
    pub fn fields(&self) -> Vec<&str> {
        let mut result = Vec::new();
        self.collect_fields(&mut result);
        result
    }

    fn collect_fields<'a>(&'a self, result: &mut Vec<&'a str>) {
        match self {
            Predicate::Simple { field, .. }
            | Predicate::IsMissing { field }
            | Predicate::IsNotMissing { field }
            | Predicate::SimpleSet { field, .. } => result.push(field.as_str()),
            Predicate::Compound { predicates, .. } => {
                for p in predicates {
                    p.collect_fields(result);
                }
            }
            Predicate::True | Predicate::False => {}
        }
    }
}
