//! Dataset generation and loading
//!
//! Generation goes through an explicitly seeded RNG so a sweep can be
//! replayed exactly. Files are flat CSV: any number of integers per line,
//! read back row-major into a single sequence.

use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::constants::{MAX_VALUE, MIN_VALUE};
use crate::error::{AppError, AppResult};

/// Produces random datasets from a seeded generator
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
    seed: u64,
}

impl DatasetGenerator {
    /// Create a generator with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator with a freshly drawn seed.
    ///
    /// The seed is logged so the run can be reproduced.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        info!(seed, "No seed configured, drew a random one");
        Self::from_seed(seed)
    }

    /// Use `seed` when given, otherwise draw one
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `len` integers uniformly distributed in `[MIN_VALUE, MAX_VALUE]`
    pub fn generate(&mut self, len: usize) -> Vec<i64> {
        (0..len)
            .map(|_| self.rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}

/// Read a flat integer dataset from a CSV file.
///
/// Every value must lie in `[MIN_VALUE, MAX_VALUE]`, the same bound the
/// generator draws from.
pub fn read_dataset(path: impl AsRef<Path>) -> AppResult<Vec<i64>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut dataset = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        for field in record.iter() {
            // out-of-range values would break negation in the descending heap sort
            let value = field
                .parse::<i64>()
                .ok()
                .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
                .ok_or_else(|| AppError::MalformedDataset {
                    line,
                    value: field.to_string(),
                })?;
            dataset.push(value);
        }
    }

    debug!(path = %path.display(), len = dataset.len(), "Loaded dataset");
    Ok(dataset)
}

/// Write a dataset as CSV with `per_row` integers per line
pub fn write_dataset(path: impl AsRef<Path>, data: &[i64], per_row: usize) -> AppResult<()> {
    if per_row == 0 {
        return Err(AppError::invalid("values per row must be positive"));
    }

    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    for chunk in data.chunks(per_row) {
        writer.write_record(chunk.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), len = data.len(), "Wrote dataset");
    Ok(())
}
