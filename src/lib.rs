//! Binsect: Supervised Discretization Library
//!
//! A library for partitioning numeric attributes into half-open intervals
//! chosen to maximize pairwise label separation against a decision column.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
