//! Comparison operator execution

use crate::error::{Result, RuntimeError};
use grove_core::{ComparisonOperator, Value};
use std::cmp::Ordering;

/// Compare a feature value against a predicate's reference value.
///
/// The reference value's type decides the comparison: a text feature is
/// parsed when the reference is numeric, a numeric feature is rendered in
/// canonical form when the reference is text.
pub(crate) fn execute_compare(
    field: &str,
    feature: &Value,
    op: ComparisonOperator,
    reference: &Value,
) -> Result<bool> {
    match (feature, reference) {
        (Value::Number(l), Value::Number(r)) => Ok(compare_numbers(*l, op, *r)),
        (Value::Text(l), Value::Number(r)) => {
            let l = l
                .trim()
                .parse::<f64>()
                .map_err(|_| RuntimeError::TypeMismatch {
                    field: field.to_string(),
                    expected: "number".to_string(),
                    actual: format!("{} {:?}", feature.type_name(), l),
                })?;
            Ok(compare_numbers(l, op, *r))
        }
        (Value::Text(l), Value::Text(r)) => Ok(ordering_matches(l.as_str().cmp(r.as_str()), op)),
        (Value::Number(_), Value::Text(r)) => {
            let l = feature.canonical();
            Ok(ordering_matches(l.as_str().cmp(r.as_str()), op))
        }
        (_, Value::Missing) => Err(RuntimeError::InvalidPredicate(format!(
            "comparison on field '{}' has no reference value",
            field
        ))),
        (Value::Missing, _) => {
            // FeatureSet::get never yields missing values
            tracing::debug!("Missing value for field '{}' reached comparison", field);
            Ok(false)
        }
    }
}

fn compare_numbers(l: f64, op: ComparisonOperator, r: f64) -> bool {
    match op {
        ComparisonOperator::Equal => l == r,
        ComparisonOperator::NotEqual => l != r,
        ComparisonOperator::LessThan => l < r,
        ComparisonOperator::LessOrEqual => l <= r,
        ComparisonOperator::GreaterThan => l > r,
        ComparisonOperator::GreaterOrEqual => l >= r,
    }
}

fn ordering_matches(ordering: Ordering, op: ComparisonOperator) -> bool {
    match op {
        ComparisonOperator::Equal => ordering == Ordering::Equal,
        ComparisonOperator::NotEqual => ordering != Ordering::Equal,
        ComparisonOperator::LessThan => ordering == Ordering::Less,
        ComparisonOperator::LessOrEqual => ordering != Ordering::Greater,
        ComparisonOperator::GreaterThan => ordering == Ordering::Greater,
        ComparisonOperator::GreaterOrEqual => ordering != Ordering::Less,
    }
}
