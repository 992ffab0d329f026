//! Reporting of a finished sweep
//!
//! Reporters only borrow the table, so a failed write can never alter the
//! results already held in memory.

pub mod chart;
pub mod csv;

use tracing::error;

use crate::error::AppResult;
use crate::models::ExperimentTable;
use crate::utils::format_nanos;

pub use self::chart::{render_svg, ChartReporter};
pub use self::csv::{read_results, write_results, CsvReporter, ResultRow};

/// A destination for the finished results table
pub trait Reporter {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Persist or render the table
    fn report(&self, table: &ExperimentTable) -> AppResult<()>;
}

/// Hand the table to every reporter.
///
/// Every reporter runs even if an earlier one fails; the first failure is
/// returned once all have been tried. Nothing is retried.
pub fn publish(table: &ExperimentTable, reporters: &[&dyn Reporter]) -> AppResult<()> {
    let mut first_error = None;

    for reporter in reporters {
        if let Err(e) = reporter.report(table) {
            error!(reporter = reporter.name(), error = %e, "Reporter failed");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Plain-text summary of the table for terminal output
pub fn summary_table(table: &ExperimentTable) -> String {
    let mut out = format!(
        "{:>12}  {:>16}  {:>16}  {:>8}\n",
        "Size", "Bubble Sort", "Binary Heap Sort", "Failures"
    );
    for row in &table.rows {
        out.push_str(&format!(
            "{:>12}  {:>16}  {:>16}  {:>8}\n",
            row.dataset_size,
            format_nanos(row.avg_bubble_nanos),
            format_nanos(row.avg_heap_nanos),
            row.correctness_failures
        ));
    }
    out
}
