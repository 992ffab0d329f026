//! SortBench - Application Entry Point

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{
    benchmark::{
        read_dataset, run_all_experiments, write_dataset, DatasetGenerator, ExperimentRunner,
        TrialTimer,
    },
    cli::{Cli, Commands, RunArgs},
    config::Config,
    report::{publish, summary_table, ChartReporter, CsvReporter, Reporter},
    utils::format_nanos,
    SortOrder,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        None => run(&mut config, &RunArgs::default()),
        Some(Commands::Run(args)) => run(&mut config, &args),
        Some(Commands::Generate {
            size,
            seed,
            per_row,
            output,
        }) => generate(size, seed, per_row, &output),
        Some(Commands::Sort { input, order }) => sort_file(&input, order),
    }
}

fn run(config: &mut Config, args: &RunArgs) -> anyhow::Result<()> {
    args.apply(config);
    config.validate()?;

    let bench = &config.benchmark;
    tracing::info!(
        runs = bench.runs,
        order = %bench.order,
        sizes = ?bench.sizes,
        "Starting sweep"
    );

    let mut runner = ExperimentRunner::new(DatasetGenerator::new(bench.seed));
    tracing::info!(seed = runner.seed(), "Dataset generator ready");

    let table = run_all_experiments(&mut runner, &bench.sizes, bench.runs, bench.order)?;

    print!("{}", summary_table(&table));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    }
    if table.total_failures() > 0 {
        tracing::warn!(
            failures = table.total_failures(),
            "Some sorts disagreed with the reference ordering"
        );
    }

    let csv = CsvReporter::new(&config.output.results_path);
    let chart = config.output.chart_path.as_ref().map(ChartReporter::new);
    let mut reporters: Vec<&dyn Reporter> = vec![&csv];
    if let Some(chart) = &chart {
        reporters.push(chart);
    }
    publish(&table, &reporters)?;

    Ok(())
}

fn generate(size: usize, seed: Option<u64>, per_row: usize, output: &Path) -> anyhow::Result<()> {
    let mut generator = DatasetGenerator::new(seed);
    let data = generator.generate(size);
    write_dataset(output, &data, per_row)?;

    tracing::info!(size, seed = generator.seed(), path = %output.display(), "Dataset generated");
    Ok(())
}

fn sort_file(input: &Path, order: SortOrder) -> anyhow::Result<()> {
    let data = read_dataset(input)?;
    let trial = TrialTimer::new().run_on_dataset(&data, order);

    println!("Dataset Size: {}", trial.dataset_size);
    println!(
        "Bubble Sort Time: {} ({})",
        format_nanos(trial.bubble_nanos as f64),
        trial.bubble_verdict
    );
    println!(
        "Binary Heap Sort Time: {} ({})",
        format_nanos(trial.heap_nanos as f64),
        trial.heap_verdict
    );

    if !trial.is_correct() {
        tracing::warn!("Sort output disagreed with the reference ordering");
    }
    Ok(())
}
