//! Scoring input types
//!
//! This module contains:
//! - The scalar `Value` type
//! - The `FeatureSet` map a caller scores against

pub mod feature;
pub mod value;

pub use feature::FeatureSet;
pub use value::Value;
