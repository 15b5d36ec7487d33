//! Forest model definitions
//!
//! A `RandomForest` is an ordered list of `Tree`s. Each tree owns a rooted
//! hierarchy of `Node`s, and every node carries the `Predicate` that decides
//! whether traversal enters it.

pub mod forest;
pub mod node;
pub mod operator;
pub mod predicate;

pub use forest::{MissingValueStrategy, NoTrueChildStrategy, RandomForest, Tree};
pub use node::Node;
pub use operator::{BooleanOperator, ComparisonOperator, SetOperator};
pub use predicate::Predicate;
