//! Domain models
//!
//! Sort orders, per-trial measurements and the aggregated results table.

pub mod benchmark;
pub mod verdict;

pub use benchmark::*;
pub use verdict::*;
