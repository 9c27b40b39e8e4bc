//! Report module - terminal summary and JSON export

pub mod splits_export;
pub mod summary;

pub use splits_export::*;
pub use summary::*;
