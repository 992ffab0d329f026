//! Experiment runner - times both algorithms on one dataset per trial
//!
//! Workflow for a trial:
//! 1. Generate a fresh dataset (untimed)
//! 2. Time bubble sort on its own copy
//! 3. Time binary heap sort on its own copy of the same values
//! 4. Compute the reference ordering (untimed) and check both outputs
//!
//! A mismatch is logged and recorded on the trial, never raised.

use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::models::{SortOrder, TrialResult, Verdict};
use crate::utils::time_nanos;

use super::algorithms::{reference_sort, BinaryHeapSort, BubbleSort, Sorter};
use super::dataset::DatasetGenerator;

/// Anything that can produce one trial's measurements
#[cfg_attr(test, mockall::automock)]
pub trait TrialSource {
    /// Run one trial on a dataset of `size` values
    fn run_trial(&mut self, size: usize, order: SortOrder) -> AppResult<TrialResult>;
}

/// Times a pair of sorters on caller-supplied data
pub struct TrialTimer {
    bubble: Box<dyn Sorter>,
    heap: Box<dyn Sorter>,
}

impl TrialTimer {
    /// Bubble sort against binary heap sort
    pub fn new() -> Self {
        Self::with_sorters(Box::new(BubbleSort), Box::new(BinaryHeapSort))
    }

    /// Time arbitrary sorters in the bubble and heap slots
    pub fn with_sorters(bubble: Box<dyn Sorter>, heap: Box<dyn Sorter>) -> Self {
        Self { bubble, heap }
    }

    /// Time both algorithms on `data` and check them against the reference
    pub fn run_on_dataset(&self, data: &[i64], order: SortOrder) -> TrialResult {
        let (bubble_sorted, bubble_nanos) = time_sort(self.bubble.as_ref(), data, order);
        let (heap_sorted, heap_nanos) = time_sort(self.heap.as_ref(), data, order);

        let reference = reference_sort(data, order);
        let bubble_verdict = check(self.bubble.as_ref(), &bubble_sorted, &reference, order);
        let heap_verdict = check(self.heap.as_ref(), &heap_sorted, &reference, order);

        info!(
            dataset_size = data.len(),
            bubble_ns = bubble_nanos,
            heap_ns = heap_nanos,
            "Trial complete"
        );

        TrialResult {
            dataset_size: data.len(),
            bubble_nanos,
            heap_nanos,
            bubble_verdict,
            heap_verdict,
        }
    }
}

impl Default for TrialTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TrialTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrialTimer")
            .field("bubble", &self.bubble.name())
            .field("heap", &self.heap.name())
            .finish()
    }
}

/// Runs trials against freshly generated datasets
#[derive(Debug)]
pub struct ExperimentRunner {
    generator: DatasetGenerator,
    timer: TrialTimer,
}

impl ExperimentRunner {
    /// Create a runner drawing datasets from `generator`
    pub fn new(generator: DatasetGenerator) -> Self {
        Self::with_timer(generator, TrialTimer::new())
    }

    pub fn with_timer(generator: DatasetGenerator, timer: TrialTimer) -> Self {
        Self { generator, timer }
    }

    /// Seed of the underlying dataset generator
    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }
}

impl TrialSource for ExperimentRunner {
    fn run_trial(&mut self, size: usize, order: SortOrder) -> AppResult<TrialResult> {
        if size == 0 {
            return Err(AppError::invalid("dataset size must be positive"));
        }

        let data = self.generator.generate(size);
        debug!(dataset_size = size, %order, "Generated dataset");

        Ok(self.timer.run_on_dataset(&data, order))
    }
}

/// Time a single sort call; only the call itself is inside the interval
fn time_sort(sorter: &dyn Sorter, data: &[i64], order: SortOrder) -> (Vec<i64>, u64) {
    let (sorted, nanos) = time_nanos(|| sorter.sort(data, order));
    debug!(algorithm = sorter.name(), nanos, "Sort timed");
    (sorted, nanos)
}

fn check(sorter: &dyn Sorter, output: &[i64], reference: &[i64], order: SortOrder) -> Verdict {
    let verdict = Verdict::check(output, reference);
    if verdict.is_failure() {
        error!(
            algorithm = sorter.name(),
            dataset_size = reference.len(),
            %order,
            "Sort output disagrees with the reference ordering"
        );
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dataset_both_orders() {
        let timer = TrialTimer::new();

        let asc = timer.run_on_dataset(&[5, 3, 8, 1], SortOrder::Ascending);
        assert!(asc.is_correct());
        assert_eq!(asc.dataset_size, 4);

        let desc = timer.run_on_dataset(&[5, 3, 8, 1], SortOrder::Descending);
        assert!(desc.is_correct());
    }

    #[test]
    fn test_run_trial_generates_requested_size() {
        let mut runner = ExperimentRunner::new(DatasetGenerator::from_seed(42));

        let trial = runner.run_trial(200, SortOrder::Descending).unwrap();
        assert_eq!(trial.dataset_size, 200);
        assert_eq!(trial.bubble_verdict, Verdict::Correct);
        assert_eq!(trial.heap_verdict, Verdict::Correct);
    }

    #[test]
    fn test_run_trial_rejects_zero_size() {
        let mut runner = ExperimentRunner::new(DatasetGenerator::from_seed(42));

        let err = runner.run_trial(0, SortOrder::Ascending).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_dataset_is_correct() {
        let trial = TrialTimer::new().run_on_dataset(&[], SortOrder::Ascending);
        assert!(trial.is_correct());
        assert_eq!(trial.dataset_size, 0);
    }

    /// Returns its input untouched
    struct Identity;

    impl Sorter for Identity {
        fn name(&self) -> &'static str {
            "Identity"
        }

        fn sort(&self, data: &[i64], _order: SortOrder) -> Vec<i64> {
            data.to_vec()
        }
    }

    #[test]
    fn test_mismatch_is_recorded_on_trial() {
        let timer = TrialTimer::with_sorters(Box::new(BubbleSort), Box::new(Identity));

        let trial = timer.run_on_dataset(&[3, 1, 2], SortOrder::Ascending);
        assert_eq!(trial.bubble_verdict, Verdict::Correct);
        assert_eq!(trial.heap_verdict, Verdict::Mismatch);
        assert!(!trial.is_correct());
        assert_eq!(trial.failure_count(), 1);
    }

    #[test]
    fn test_mismatch_does_not_abort_run_trial() {
        let timer = TrialTimer::with_sorters(Box::new(Identity), Box::new(Identity));
        let mut runner = ExperimentRunner::with_timer(DatasetGenerator::from_seed(9), timer);

        let trial = runner.run_trial(50, SortOrder::Descending).unwrap();
        assert_eq!(trial.dataset_size, 50);
        assert_eq!(trial.bubble_verdict, Verdict::Mismatch);
        assert_eq!(trial.heap_verdict, Verdict::Mismatch);
    }
}
