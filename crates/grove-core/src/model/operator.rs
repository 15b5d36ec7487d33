//! Predicate operators
//!
//! Operator names follow PMML (`lessOrEqual`, `isIn`, `surrogate`, ...) both
//! for parsing and for display.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operators of a simple comparison predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "equal",
            ComparisonOperator::NotEqual => "notEqual",
            ComparisonOperator::LessThan => "lessThan",
            ComparisonOperator::LessOrEqual => "lessOrEqual",
            ComparisonOperator::GreaterThan => "greaterThan",
            ComparisonOperator::GreaterOrEqual => "greaterOrEqual",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(ComparisonOperator::Equal),
            "notEqual" => Ok(ComparisonOperator::NotEqual),
            "lessThan" => Ok(ComparisonOperator::LessThan),
            "lessOrEqual" => Ok(ComparisonOperator::LessOrEqual),
            "greaterThan" => Ok(ComparisonOperator::GreaterThan),
            "greaterOrEqual" => Ok(ComparisonOperator::GreaterOrEqual),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

/// Operators of a set membership predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetOperator {
    IsIn,
    IsNotIn,
}

impl SetOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetOperator::IsIn => "isIn",
            SetOperator::IsNotIn => "isNotIn",
        }
    }
}

impl FromStr for SetOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isIn" => Ok(SetOperator::IsIn),
            "isNotIn" => Ok(SetOperator::IsNotIn),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

/// Operators combining the children of a compound predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BooleanOperator {
    And,
    Or,
    Xor,
    /// First child with a known result decides
    Surrogate,
}

impl BooleanOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "and",
            BooleanOperator::Or => "or",
            BooleanOperator::Xor => "xor",
            BooleanOperator::Surrogate => "surrogate",
        }
    }
}

impl FromStr for BooleanOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(BooleanOperator::And),
            "or" => Ok(BooleanOperator::Or),
            "xor" => Ok(BooleanOperator::Xor),
            "surrogate" => Ok(BooleanOperator::Surrogate),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
