//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SWEEP DEFAULTS
// =============================================================================

/// Dataset sizes benchmarked by a full sweep, in run order
pub const DEFAULT_DATASET_SIZES: &[usize] = &[1000, 5000, 15000, 20000, 25000, 30000, 35000, 40000];

/// Default number of trials averaged per dataset size
pub const DEFAULT_RUNS: u32 = 3;

/// Default sort order for a sweep
pub const DEFAULT_ORDER: &str = "asc";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// DATASET GENERATION
// =============================================================================

/// Smallest value a generated dataset may contain
pub const MIN_VALUE: i64 = 0;

/// Largest value a generated dataset may contain (inclusive)
pub const MAX_VALUE: i64 = 10_000;

/// Integers written per line by the dataset writer
pub const DEFAULT_VALUES_PER_ROW: usize = 20;

// =============================================================================
// OUTPUT
// =============================================================================

/// Default destination of the results table
pub const DEFAULT_RESULTS_PATH: &str = "results.csv";

/// Default destination of the comparison chart
pub const DEFAULT_CHART_PATH: &str = "results.svg";

/// Results table column labels
pub mod columns {
    pub const DATASET_SIZE: &str = "Dataset Size";
    pub const AVG_BUBBLE: &str = "Avg Bubble Sort Time (ns)";
    pub const AVG_HEAP: &str = "Avg Binary Heap Sort Time (ns)";

    /// Header row of the results table
    pub const HEADER: [&str; 3] = [DATASET_SIZE, AVG_BUBBLE, AVG_HEAP];
}

/// Algorithm display names
pub mod algorithms {
    pub const BUBBLE_SORT: &str = "Bubble Sort";
    pub const BINARY_HEAP_SORT: &str = "Binary Heap Sort";
}

/// Chart labels
pub mod chart {
    pub const TITLE: &str = "Comparison of Sorting Algorithm Efficiency";
    pub const X_LABEL: &str = "Dataset Size";
    pub const Y_LABEL: &str = "Average Runtime (ns)";
    pub const WIDTH: u32 = 1000;
    pub const HEIGHT: u32 = 600;
}
