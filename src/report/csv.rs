//! Results table persistence as CSV

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::columns;
use crate::error::{AppError, AppResult};
use crate::models::{ExperimentTable, SizeResult};

use super::Reporter;

/// One persisted row of the results table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Dataset Size")]
    pub dataset_size: usize,
    #[serde(rename = "Avg Bubble Sort Time (ns)")]
    pub avg_bubble_nanos: f64,
    #[serde(rename = "Avg Binary Heap Sort Time (ns)")]
    pub avg_heap_nanos: f64,
}

impl From<&SizeResult> for ResultRow {
    fn from(result: &SizeResult) -> Self {
        Self {
            dataset_size: result.dataset_size,
            avg_bubble_nanos: result.avg_bubble_nanos,
            avg_heap_nanos: result.avg_heap_nanos,
        }
    }
}

/// Write the table to `path`: header row, then one row per size in table order
pub fn write_results(path: impl AsRef<Path>, table: &ExperimentTable) -> AppResult<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path)?;

    // serialize() would skip the header for an empty table
    writer.write_record(columns::HEADER)?;
    for row in &table.rows {
        // Debug keeps the fractional part on whole means: 1500000.0, not 1500000
        writer.write_record(&[
            row.dataset_size.to_string(),
            format!("{:?}", row.avg_bubble_nanos),
            format!("{:?}", row.avg_heap_nanos),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = table.len(), "Results have been written");
    Ok(())
}

/// Read a results table previously written by [`write_results`]
pub fn read_results(path: impl AsRef<Path>) -> AppResult<Vec<ResultRow>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(columns::HEADER) {
        return Err(AppError::MalformedResults(format!(
            "unexpected header {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(AppError::from))
        .collect()
}

/// Persists the table as CSV
#[derive(Debug, Clone)]
pub struct CsvReporter {
    path: PathBuf,
}

impl CsvReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn report(&self, table: &ExperimentTable) -> AppResult<()> {
        write_results(&self.path, table)
    }
}
