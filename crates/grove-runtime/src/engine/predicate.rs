//! Predicate evaluation
//!
//! Predicates evaluate to three-valued [`Truth`]: a comparison on a field the
//! feature set does not supply is `Unknown` rather than false.

use crate::engine::operators::execute_compare;
use crate::error::Result;
use grove_core::{BooleanOperator, ComparisonOperator, FeatureSet, Predicate, SetOperator};

/// Three-valued predicate result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value {
            Truth::True
        } else {
            Truth::False
        }
    }
}

/// Evaluate a predicate against a feature set.
///
/// Pure with respect to both arguments. A feature value that cannot be
/// coerced to the reference type fails with `TypeMismatch`.
pub fn evaluate(predicate: &Predicate, features: &FeatureSet) -> Result<Truth> {
    match predicate {
        Predicate::True => Ok(Truth::True),
        Predicate::False => Ok(Truth::False),
        Predicate::IsMissing { field } => Ok(Truth::from(!features.contains(field))),
        Predicate::IsNotMissing { field } => Ok(Truth::from(features.contains(field))),
        Predicate::Simple {
            field,
            operator,
            value,
        } => match features.get(field) {
            Some(feature) => execute_compare(field, feature, *operator, value).map(Truth::from),
            None => Ok(Truth::Unknown),
        },
        Predicate::SimpleSet {
            field,
            operator,
            values,
        } => {
            let Some(feature) = features.get(field) else {
                return Ok(Truth::Unknown);
            };

            let mut found = false;
            for value in values {
                if execute_compare(field, feature, ComparisonOperator::Equal, value)? {
                    found = true;
                    break;
                }
            }

            Ok(Truth::from(match operator {
                SetOperator::IsIn => found,
                SetOperator::IsNotIn => !found,
            }))
        }
        Predicate::Compound {
            operator,
            predicates,
        } => evaluate_compound(*operator, predicates, features),
    }
}

fn evaluate_compound(
    operator: BooleanOperator,
    predicates: &[Predicate],
    features: &FeatureSet,
) -> Result<Truth> {
    match operator {
        BooleanOperator::And => {
            let mut unknown = false;
            for predicate in predicates {
                match evaluate(predicate, features)? {
                    Truth::False => return Ok(Truth::False),
                    Truth::Unknown => unknown = true,
                    Truth::True => {}
                }
            }
            Ok(if unknown { Truth::Unknown } else { Truth::True })
        }
        BooleanOperator::Or => {
            let mut unknown = false;
            for predicate in predicates {
                match evaluate(predicate, features)? {
                    Truth::True => return Ok(Truth::True),
                    Truth::Unknown => unknown = true,
                    Truth::False => {}
                }
            }
            Ok(if unknown { Truth::Unknown } else { Truth::False })
        }
        BooleanOperator::Xor => {
            let mut odd = false;
            for predicate in predicates {
                match evaluate(predicate, features)? {
                    Truth::Unknown => return Ok(Truth::Unknown),
                    Truth::True => odd = !odd,
                    Truth::False => {}
                }
            }
            Ok(Truth::from(odd))
        }
        BooleanOperator::Surrogate => {
            for predicate in predicates {
                match evaluate(predicate, features)? {
                    Truth::Unknown => continue,
                    decided => return Ok(decided),
                }
            }
            Ok(Truth::Unknown)
        }
    }
}
