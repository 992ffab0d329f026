//! Command-line interface
//!
//! Flags override the environment-derived [`Config`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::constants::DEFAULT_VALUES_PER_ROW;
use crate::models::SortOrder;

#[derive(Parser, Debug)]
#[command(name = "sortbench", version, about = "Benchmark bubble sort against binary heap sort")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full size sweep (default)
    Run(RunArgs),
    /// Generate a random dataset file
    Generate {
        /// Number of integers to generate
        #[arg(long)]
        size: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Integers written per line
        #[arg(long, default_value_t = DEFAULT_VALUES_PER_ROW)]
        per_row: usize,

        /// Destination CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Time both algorithms once on a dataset file
    Sort {
        /// CSV file of integers
        #[arg(short, long)]
        input: PathBuf,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Trials averaged per dataset size
    #[arg(long)]
    pub runs: Option<u32>,

    /// asc or desc
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Comma-separated dataset sizes, benchmarked in the given order
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Seed for dataset generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Results CSV destination
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart SVG destination
    #[arg(long, conflicts_with = "no_chart")]
    pub chart: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Print the results table as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(runs) = self.runs {
            config.benchmark.runs = runs;
        }
        if let Some(order) = self.order {
            config.benchmark.order = order;
        }
        if let Some(sizes) = &self.sizes {
            config.benchmark.sizes = sizes.clone();
        }
        if self.seed.is_some() {
            config.benchmark.seed = self.seed;
        }
        if let Some(output) = &self.output {
            config.output.results_path = output.clone();
        }
        if let Some(chart) = &self.chart {
            config.output.chart_path = Some(chart.clone());
        }
        if self.no_chart {
            config.output.chart_path = None;
        }
    }
}
