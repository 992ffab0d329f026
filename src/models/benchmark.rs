//! Benchmark result models

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Verdict;

/// Direction both algorithms and the reference sort order their output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Short identifier used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Compare two values so that `Less` means `a` belongs before `b`
    pub fn compare(&self, a: i64, b: i64) -> Ordering {
        match self {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        }
    }

    /// Whether an adjacent pair `(left, right)` is out of order
    #[inline]
    pub fn should_swap(&self, left: i64, right: i64) -> bool {
        match self {
            SortOrder::Ascending => left > right,
            SortOrder::Descending => left < right,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// Timings for one trial: both algorithms against one generated dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    pub dataset_size: usize,
    /// Bubble sort wall-clock time in nanoseconds
    pub bubble_nanos: u64,
    /// Binary heap sort wall-clock time in nanoseconds
    pub heap_nanos: u64,
    pub bubble_verdict: Verdict,
    pub heap_verdict: Verdict,
}

impl TrialResult {
    /// Both algorithms agreed with the reference ordering
    pub fn is_correct(&self) -> bool {
        !self.bubble_verdict.is_failure() && !self.heap_verdict.is_failure()
    }

    /// Number of algorithms whose output disagreed with the reference
    pub fn failure_count(&self) -> u32 {
        u32::from(self.bubble_verdict.is_failure()) + u32::from(self.heap_verdict.is_failure())
    }
}

/// Averaged timings for one dataset size (one row of the results table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResult {
    pub dataset_size: usize,
    /// Mean bubble sort time across `runs` trials, in nanoseconds
    pub avg_bubble_nanos: f64,
    /// Mean binary heap sort time across `runs` trials, in nanoseconds
    pub avg_heap_nanos: f64,
    /// Number of trials averaged
    pub runs: u32,
    /// Algorithm outputs that disagreed with the reference across all trials
    pub correctness_failures: u32,
}

/// Aggregated results of a full sweep, in configured size order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentTable {
    pub order: SortOrder,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<SizeResult>,
}

impl ExperimentTable {
    /// Create an empty table for a sweep in the given order
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            generated_at: Utc::now(),
            rows: Vec::new(),
        }
    }

    /// Append a row; rows keep insertion order
    pub fn push(&mut self, row: SizeResult) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dataset sizes in table order
    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.dataset_size).collect()
    }

    /// Bubble sort averages in table order
    pub fn bubble_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.avg_bubble_nanos).collect()
    }

    /// Binary heap sort averages in table order
    pub fn heap_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.avg_heap_nanos).collect()
    }

    /// Total correctness failures across the sweep
    pub fn total_failures(&self) -> u32 {
        self.rows.iter().map(|r| r.correctness_failures).sum()
    }
}
