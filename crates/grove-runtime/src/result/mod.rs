//! Scoring result types

mod tally;
mod trace;

pub use tally::LabelScores;
pub use trace::TraversalTrace;
