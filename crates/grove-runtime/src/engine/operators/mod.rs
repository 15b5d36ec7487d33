//! Operator execution modules
//!
//! This module contains comparison of feature values against predicate
//! reference values.

mod comparison;

pub(crate) use comparison::execute_compare;
