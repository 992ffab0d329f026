//! SortBench - Sorting Algorithm Benchmark
//!
//! Benchmarks an O(n²) bubble sort against an O(n log n) binary heap sort
//! over a sweep of random dataset sizes, averages the wall-clock timings of
//! repeated trials, persists the results as CSV and renders an SVG chart.
//!
//! # Architecture
//!
//! - **Benchmark**: algorithms, dataset generation, trial runner, aggregation
//! - **Report**: CSV persistence and chart rendering of the finished table
//! - **Models**: sort order, trial and per-size results
//!
//! Execution is single-threaded end to end.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExperimentTable, SizeResult, SortOrder, TrialResult, Verdict};
