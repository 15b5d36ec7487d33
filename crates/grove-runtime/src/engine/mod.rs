//! Scoring engine module
//!
//! Provides predicate evaluation and tree traversal.

mod operators;
pub mod predicate;
pub mod walker;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use predicate::{evaluate, Truth};
pub use walker::TreeWalker;
