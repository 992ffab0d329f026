//! Application configuration management
//!
//! Configuration is loaded from environment variables (and a `.env` file when
//! present), then optionally overridden from the command line. It is
//! validated before any dataset is generated.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_CHART_PATH, DEFAULT_DATASET_SIZES, DEFAULT_LOG_LEVEL, DEFAULT_ORDER,
    DEFAULT_RESULTS_PATH, DEFAULT_RUNS,
};
use crate::error::{AppError, AppResult};
use crate::models::SortOrder;

/// Environment variable names
pub mod vars {
    pub const RUNS: &str = "SORTBENCH_RUNS";
    pub const ORDER: &str = "SORTBENCH_ORDER";
    pub const SIZES: &str = "SORTBENCH_SIZES";
    pub const SEED: &str = "SORTBENCH_SEED";
    pub const RESULTS_PATH: &str = "SORTBENCH_RESULTS_PATH";
    pub const CHART_PATH: &str = "SORTBENCH_CHART_PATH";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub benchmark: BenchmarkConfig,
    pub output: OutputConfig,
    pub rust_log: String,
}

/// Sweep configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    /// Trials averaged per dataset size
    pub runs: u32,
    pub order: SortOrder,
    /// Dataset sizes, benchmarked in this order
    pub sizes: Vec<usize>,
    /// Seed for dataset generation; drawn at random when absent
    pub seed: Option<u64>,
}

/// Output destinations
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub results_path: PathBuf,
    /// `None` disables chart rendering
    pub chart_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            benchmark: BenchmarkConfig {
                runs: DEFAULT_RUNS,
                order: SortOrder::default(),
                sizes: DEFAULT_DATASET_SIZES.to_vec(),
                seed: None,
            },
            output: OutputConfig {
                results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
                chart_path: Some(PathBuf::from(DEFAULT_CHART_PATH)),
            },
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            benchmark: BenchmarkConfig::from_lookup(&lookup)?,
            output: OutputConfig::from_lookup(&lookup),
            rust_log: lookup(vars::RUST_LOG).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Check every precondition of a sweep
    pub fn validate(&self) -> AppResult<()> {
        self.benchmark.validate()
    }
}

impl BenchmarkConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            runs: parse_var(lookup, vars::RUNS, DEFAULT_RUNS)?,
            order: lookup(vars::ORDER)
                .unwrap_or_else(|| DEFAULT_ORDER.to_string())
                .parse::<SortOrder>()
                .map_err(|_| ConfigError::InvalidValue(vars::ORDER.to_string()))?,
            sizes: match lookup(vars::SIZES) {
                Some(raw) => parse_sizes(&raw)
                    .map_err(|_| ConfigError::InvalidValue(vars::SIZES.to_string()))?,
                None => DEFAULT_DATASET_SIZES.to_vec(),
            },
            seed: lookup(vars::SEED)
                .map(|raw| raw.trim().parse::<u64>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue(vars::SEED.to_string()))?,
        })
    }

    /// Fail fast on a zero trial count or a bad sweep
    pub fn validate(&self) -> AppResult<()> {
        crate::benchmark::metrics::validate_runs(self.runs)?;
        crate::benchmark::metrics::validate_sweep(&self.sizes)
    }
}

impl OutputConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            results_path: PathBuf::from(
                lookup(vars::RESULTS_PATH).unwrap_or_else(|| DEFAULT_RESULTS_PATH.to_string()),
            ),
            chart_path: match lookup(vars::CHART_PATH) {
                // an explicitly empty value turns the chart off
                Some(raw) if raw.trim().is_empty() => None,
                Some(raw) => Some(PathBuf::from(raw)),
                None => Some(PathBuf::from(DEFAULT_CHART_PATH)),
            },
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Parse a comma-separated list of dataset sizes
pub fn parse_sizes(raw: &str) -> AppResult<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| AppError::invalid(format!("invalid dataset size {:?}", s)))
        })
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.benchmark.runs, 3);
        assert_eq!(config.benchmark.order, SortOrder::Ascending);
        assert_eq!(
            config.benchmark.sizes,
            vec![1000, 5000, 15000, 20000, 25000, 30000, 35000, 40000]
        );
        assert_eq!(config.output.results_path, PathBuf::from("results.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (vars::RUNS, "5"),
            (vars::ORDER, "desc"),
            (vars::SIZES, "10, 20,30"),
            (vars::SEED, "99"),
            (vars::CHART_PATH, ""),
        ])
        .unwrap();

        assert_eq!(config.benchmark.runs, 5);
        assert_eq!(config.benchmark.order, SortOrder::Descending);
        assert_eq!(config.benchmark.sizes, vec![10, 20, 30]);
        assert_eq!(config.benchmark.seed, Some(99));
        assert_eq!(config.output.chart_path, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[(vars::RUNS, "three")]).is_err());
        assert!(load(&[(vars::RUNS, "-1")]).is_err());
        assert!(load(&[(vars::ORDER, "random")]).is_err());
        assert!(load(&[(vars::SIZES, "10,-5")]).is_err());
        assert!(load(&[(vars::SEED, "abc")]).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_runs_and_sizes() {
        let config = load(&[(vars::RUNS, "0")]).unwrap();
        assert!(config.validate().unwrap_err().is_configuration());

        let config = load(&[(vars::SIZES, "100,0")]).unwrap();
        assert!(config.validate().is_err());

        let config = load(&[(vars::SIZES, " , ")]).unwrap();
        assert!(config.validate().is_err());
    }
}
