//! Pipeline module - loading, discretization, and labeling

pub mod dataset;
pub mod discretize;
pub mod intervals;
pub mod loader;

pub use dataset::*;
pub use discretize::*;
pub use intervals::*;
pub use loader::*;
