//! Benchmark execution engine
//!
//! The pipeline is strictly sequential:
//!
//! 1. **Aggregator** (`metrics.rs`): walks the size sweep and averages trials.
//! 2. **Runner** (`runner.rs`): one trial = one generated dataset, both sorts
//!    timed on independent copies, outputs checked against a reference sort.
//! 3. **Algorithms** (`algorithms.rs`): bubble sort and binary heap sort.
//!
//! Nothing here spawns threads; parallel trials would perturb the timings.

pub mod algorithms;
pub mod dataset;
pub mod metrics;
pub mod runner;

pub use algorithms::{binary_heap_sort, bubble_sort, reference_sort, BinaryHeapSort, BubbleSort, Sorter};
pub use dataset::{read_dataset, write_dataset, DatasetGenerator};
pub use metrics::{run_all_experiments, run_experiment_for_size, MetricsCollector};
pub use runner::{ExperimentRunner, TrialSource, TrialTimer};
