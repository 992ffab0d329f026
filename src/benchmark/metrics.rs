//! Metrics collection and aggregation across trials and dataset sizes

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{ExperimentTable, SizeResult, SortOrder, TrialResult};
use crate::utils::format_nanos;

use super::runner::TrialSource;

/// Collects the trials of one dataset size
pub struct MetricsCollector {
    dataset_size: usize,
    trials: Vec<TrialResult>,
}

impl MetricsCollector {
    /// Create a new collector for one dataset size
    pub fn new(dataset_size: usize) -> Self {
        Self {
            dataset_size,
            trials: Vec::new(),
        }
    }

    /// Add a trial
    pub fn add_trial(&mut self, trial: TrialResult) {
        self.trials.push(trial);
    }

    /// Get number of trials
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Arithmetic mean of each algorithm's duration, or `None` with no trials
    pub fn calculate_results(&self) -> Option<SizeResult> {
        if self.trials.is_empty() {
            return None;
        }

        let count = self.trials.len() as f64;
        let bubble_total: f64 = self.trials.iter().map(|t| t.bubble_nanos as f64).sum();
        let heap_total: f64 = self.trials.iter().map(|t| t.heap_nanos as f64).sum();

        Some(SizeResult {
            dataset_size: self.dataset_size,
            avg_bubble_nanos: bubble_total / count,
            avg_heap_nanos: heap_total / count,
            runs: self.trials.len() as u32,
            correctness_failures: self.trials.iter().map(TrialResult::failure_count).sum(),
        })
    }
}

/// Run `runs` trials at one dataset size and average them
pub fn run_experiment_for_size(
    source: &mut dyn TrialSource,
    size: usize,
    runs: u32,
    order: SortOrder,
) -> AppResult<SizeResult> {
    validate_runs(runs)?;
    validate_size(size)?;

    let mut collector = MetricsCollector::new(size);
    for run in 1..=runs {
        info!(run, runs, dataset_size = size, "Running experiment");
        collector.add_trial(source.run_trial(size, order)?);
    }

    let result = collector
        .calculate_results()
        .ok_or_else(|| anyhow::anyhow!("no trials collected for size {}", size))?;

    info!(
        dataset_size = size,
        avg_bubble = %format_nanos(result.avg_bubble_nanos),
        avg_heap = %format_nanos(result.avg_heap_nanos),
        failures = result.correctness_failures,
        "Size complete"
    );

    Ok(result)
}

/// Run the full sweep, one table row per size in the configured order
pub fn run_all_experiments(
    source: &mut dyn TrialSource,
    sizes: &[usize],
    runs: u32,
    order: SortOrder,
) -> AppResult<ExperimentTable> {
    validate_runs(runs)?;
    validate_sweep(sizes)?;

    let mut table = ExperimentTable::new(order);
    for &size in sizes {
        info!(dataset_size = size, "Running experiments for dataset size");
        table.push(run_experiment_for_size(source, size, runs, order)?);
    }

    Ok(table)
}

/// Reject a zero trial count before any work is done
pub fn validate_runs(runs: u32) -> AppResult<()> {
    if runs == 0 {
        return Err(AppError::invalid("runs must be at least 1"));
    }
    Ok(())
}

fn validate_size(size: usize) -> AppResult<()> {
    if size == 0 {
        return Err(AppError::invalid("dataset size must be positive"));
    }
    Ok(())
}

/// Reject an empty sweep or one containing a zero size
pub fn validate_sweep(sizes: &[usize]) -> AppResult<()> {
    if sizes.is_empty() {
        return Err(AppError::invalid("dataset size sweep is empty"));
    }
    if let Some(position) = sizes.iter().position(|&s| s == 0) {
        return Err(AppError::invalid(format!(
            "dataset size at position {} must be positive",
            position + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::runner::MockTrialSource;
    use crate::benchmark::{DatasetGenerator, ExperimentRunner};
    use crate::models::Verdict;

    fn trial(size: usize, bubble: u64, heap: u64) -> TrialResult {
        TrialResult {
            dataset_size: size,
            bubble_nanos: bubble,
            heap_nanos: heap,
            bubble_verdict: Verdict::Correct,
            heap_verdict: Verdict::Correct,
        }
    }

    #[test]
    fn test_mean_of_three_runs() {
        let mut durations = vec![(10, 1), (20, 2), (30, 6)].into_iter();
        let mut source = MockTrialSource::new();
        source
            .expect_run_trial()
            .withf(|size, order| *size == 1000 && *order == SortOrder::Ascending)
            .times(3)
            .returning(move |size, _| {
                let (bubble, heap) = durations.next().unwrap();
                Ok(trial(size, bubble, heap))
            });

        let result = run_experiment_for_size(&mut source, 1000, 3, SortOrder::Ascending).unwrap();

        assert_eq!(result.avg_bubble_nanos, 20.0);
        assert_eq!(result.avg_heap_nanos, 3.0);
        assert_eq!(result.runs, 3);
        assert_eq!(result.dataset_size, 1000);
    }

    #[test]
    fn test_zero_runs_fails_before_any_trial() {
        let mut source = MockTrialSource::new();
        source.expect_run_trial().times(0);

        let err = run_experiment_for_size(&mut source, 1000, 0, SortOrder::Ascending).unwrap_err();
        assert!(err.is_configuration());

        let err = run_all_experiments(&mut source, &[1000], 0, SortOrder::Ascending).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_sweep_fails_before_any_trial() {
        let mut source = MockTrialSource::new();
        source.expect_run_trial().times(0);

        assert!(run_all_experiments(&mut source, &[], 3, SortOrder::Ascending).is_err());
        // zero late in the sweep must still fail before the first size runs
        let err = run_all_experiments(&mut source, &[1000, 0], 3, SortOrder::Ascending).unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_failures_are_counted_not_raised() {
        let mut source = MockTrialSource::new();
        source.expect_run_trial().times(2).returning(|size, _| {
            let mut t = trial(size, 5, 5);
            t.bubble_verdict = Verdict::Mismatch;
            Ok(t)
        });

        let result = run_experiment_for_size(&mut source, 10, 2, SortOrder::Descending).unwrap();
        assert_eq!(result.correctness_failures, 2);
        assert_eq!(result.avg_bubble_nanos, 5.0);
    }

    #[test]
    fn test_sweep_preserves_configured_order() {
        let mut source = MockTrialSource::new();
        source
            .expect_run_trial()
            .times(6)
            .returning(|size, _| Ok(trial(size, size as u64 * 2, size as u64)));

        let sizes = [300, 100, 200];
        let table = run_all_experiments(&mut source, &sizes, 2, SortOrder::Ascending).unwrap();

        assert_eq!(table.sizes(), vec![300, 100, 200]);
        assert_eq!(table.bubble_series(), vec![600.0, 200.0, 400.0]);
        assert_eq!(table.heap_series(), vec![300.0, 100.0, 200.0]);
        assert_eq!(table.order, SortOrder::Ascending);
    }

    #[test]
    fn test_trial_error_propagates() {
        let mut source = MockTrialSource::new();
        source
            .expect_run_trial()
            .times(1)
            .returning(|_, _| Err(AppError::Internal(anyhow::anyhow!("boom"))));

        assert!(run_experiment_for_size(&mut source, 10, 3, SortOrder::Ascending).is_err());
    }

    #[test]
    fn test_collector_empty() {
        let collector = MetricsCollector::new(10);
        assert_eq!(collector.trial_count(), 0);
        assert!(collector.calculate_results().is_none());
    }

    #[test]
    fn test_real_runner_small_sweep() {
        let mut runner = ExperimentRunner::new(DatasetGenerator::from_seed(5));
        let table = run_all_experiments(&mut runner, &[50, 10], 2, SortOrder::Descending).unwrap();

        assert_eq!(table.sizes(), vec![50, 10]);
        assert_eq!(table.total_failures(), 0);
        assert!(table.rows.iter().all(|r| r.runs == 2));
    }
}
