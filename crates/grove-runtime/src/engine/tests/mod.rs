//! Test modules for the scoring engine
