//! Sorting algorithms under test
//!
//! Both algorithms borrow their input and return a freshly allocated,
//! sorted vector, so every call works on its own copy of the dataset.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::constants::algorithms;
use crate::models::SortOrder;

/// A sorting strategy the runner can time
pub trait Sorter {
    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    /// Return a sorted copy of `data`
    fn sort(&self, data: &[i64], order: SortOrder) -> Vec<i64>;
}

/// Adjacent-exchange sort, always O(n²)
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        algorithms::BUBBLE_SORT
    }

    fn sort(&self, data: &[i64], order: SortOrder) -> Vec<i64> {
        bubble_sort(data, order)
    }
}

/// Min-heap build followed by repeated root extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryHeapSort;

impl Sorter for BinaryHeapSort {
    fn name(&self) -> &'static str {
        algorithms::BINARY_HEAP_SORT
    }

    fn sort(&self, data: &[i64], order: SortOrder) -> Vec<i64> {
        binary_heap_sort(data, order)
    }
}

/// Bubble sort without the early-exit check.
///
/// Every pass runs to completion even on already sorted input, so the
/// comparison count is always n·(n-1)/2.
pub fn bubble_sort(data: &[i64], order: SortOrder) -> Vec<i64> {
    let mut sorted = data.to_vec();
    let n = sorted.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            if order.should_swap(sorted[j], sorted[j + 1]) {
                sorted.swap(j, j + 1);
            }
        }
    }

    sorted
}

/// Heap sort over a min-heap.
///
/// Descending order negates values on the way in and on the way out so the
/// same min-heap extraction serves both directions. Negation overflows only
/// for `i64::MIN`, which bounded datasets never contain.
pub fn binary_heap_sort(data: &[i64], order: SortOrder) -> Vec<i64> {
    match order {
        SortOrder::Ascending => drain_min_heap(data.iter().copied()),
        SortOrder::Descending => {
            debug_assert!(!data.contains(&i64::MIN), "i64::MIN cannot be negated");
            drain_min_heap(data.iter().map(|&x| -x))
                .into_iter()
                .map(|x| -x)
                .collect()
        }
    }
}

fn drain_min_heap(values: impl Iterator<Item = i64>) -> Vec<i64> {
    // `From<Vec<T>>` heapifies in O(n)
    let mut heap: BinaryHeap<Reverse<i64>> = values.map(Reverse).collect::<Vec<_>>().into();
    let mut sorted = Vec::with_capacity(heap.len());

    while let Some(Reverse(value)) = heap.pop() {
        sorted.push(value);
    }

    sorted
}

/// Trusted ordering used only to validate the algorithms; never timed
pub fn reference_sort(data: &[i64], order: SortOrder) -> Vec<i64> {
    let mut sorted = data.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_unstable(),
        SortOrder::Descending => sorted.sort_unstable_by(|a, b| b.cmp(a)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const ORDERS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    fn random_data(seed: u64, len: usize) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.random_range(0..=10_000)).collect()
    }

    #[test]
    fn test_empty_input() {
        for order in ORDERS {
            assert!(bubble_sort(&[], order).is_empty());
            assert!(binary_heap_sort(&[], order).is_empty());
        }
    }

    #[test]
    fn test_single_element() {
        for order in ORDERS {
            assert_eq!(bubble_sort(&[42], order), vec![42]);
            assert_eq!(binary_heap_sort(&[42], order), vec![42]);
        }
    }

    #[test]
    fn test_known_dataset() {
        let data = [5, 3, 8, 1];

        assert_eq!(bubble_sort(&data, SortOrder::Ascending), vec![1, 3, 5, 8]);
        assert_eq!(binary_heap_sort(&data, SortOrder::Ascending), vec![1, 3, 5, 8]);
        assert_eq!(reference_sort(&data, SortOrder::Ascending), vec![1, 3, 5, 8]);

        assert_eq!(bubble_sort(&data, SortOrder::Descending), vec![8, 5, 3, 1]);
        assert_eq!(binary_heap_sort(&data, SortOrder::Descending), vec![8, 5, 3, 1]);
        assert_eq!(reference_sort(&data, SortOrder::Descending), vec![8, 5, 3, 1]);
    }

    #[test]
    fn test_matches_reference_on_random_data() {
        for seed in 0..8 {
            let data = random_data(seed, 300);
            for order in ORDERS {
                let expected = reference_sort(&data, order);
                assert_eq!(bubble_sort(&data, order), expected, "bubble, seed {seed}, {order}");
                assert_eq!(binary_heap_sort(&data, order), expected, "heap, seed {seed}, {order}");
            }
        }
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let data = [3, -1, 3, 0, -7, 3, 0];
        for order in ORDERS {
            let expected = reference_sort(&data, order);
            assert_eq!(bubble_sort(&data, order), expected);
            assert_eq!(binary_heap_sort(&data, order), expected);
        }
    }

    #[test]
    fn test_already_sorted_is_unchanged() {
        let ascending: Vec<i64> = (0..50).collect();
        let descending: Vec<i64> = (0..50).rev().collect();

        assert_eq!(bubble_sort(&ascending, SortOrder::Ascending), ascending);
        assert_eq!(binary_heap_sort(&ascending, SortOrder::Ascending), ascending);
        assert_eq!(bubble_sort(&descending, SortOrder::Descending), descending);
        assert_eq!(binary_heap_sort(&descending, SortOrder::Descending), descending);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let data = vec![9, 2, 7, 2, 0];
        let snapshot = data.clone();

        let _ = bubble_sort(&data, SortOrder::Ascending);
        let _ = binary_heap_sort(&data, SortOrder::Descending);

        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_sorter_trait_dispatch() {
        let sorters: [&dyn Sorter; 2] = [&BubbleSort, &BinaryHeapSort];
        let data = [4, 1, 3];

        for sorter in sorters {
            assert_eq!(sorter.sort(&data, SortOrder::Ascending), vec![1, 3, 4]);
        }
        assert_eq!(BubbleSort.name(), "Bubble Sort");
        assert_eq!(BinaryHeapSort.name(), "Binary Heap Sort");
    }
}
