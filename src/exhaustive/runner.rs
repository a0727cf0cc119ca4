//! Enumeration loop.

use log::debug;

use crate::problem::{Instance, Solution};
use crate::solver::Solver;

/// Exhaustive solver: tries every subset of items.
///
/// Each bit mask in `0..2^n` is one assignment; the best feasible one wins.
/// Runs in `O(2^n * n)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Enumerates all assignments and returns the best feasible one.
    ///
    /// # Panics
    ///
    /// Panics if the instance has more than 63 items.
    pub fn run<'i>(&self, instance: &'i Instance) -> Solution<'i> {
        let n = instance.len();
        assert!(
            n <= 63,
            "exhaustive enumeration is limited to 63 items, got {n}"
        );

        debug!("[EXH] enumerating {} assignments", 1u64 << n);

        let mut best_mask = 0u64;
        let mut best_value = 0.0;
        for mask in 0..(1u64 << n) {
            let mut value = 0.0;
            let mut weight = 0.0;
            for (i, item) in instance.items().iter().enumerate() {
                if mask & (1 << i) != 0 {
                    value += item.value();
                    weight += item.weight();
                }
            }
            if weight <= instance.capacity() && value > best_value {
                best_mask = mask;
                best_value = value;
            }
        }

        let mut solution = Solution::new(instance);
        for i in 0..n {
            if best_mask & (1 << i) != 0 {
                solution.assign(i, 1);
            }
        }
        solution
    }
}

impl Solver for ExhaustiveSolver {
    fn solve<'i>(&self, instance: &'i Instance) -> Solution<'i> {
        self.run(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_optimum() {
        let instance =
            Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0).unwrap();
        let solution = ExhaustiveSolver.run(&instance);
        assert!((solution.value() - 220.0).abs() < 1e-9);
        assert_eq!(solution.quantities(), &[0, 1, 1]);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(Vec::new(), 5.0).unwrap();
        let solution = ExhaustiveSolver.run(&instance);
        assert_eq!(solution.value(), 0.0);
    }

    #[test]
    fn test_single_item_too_heavy() {
        let instance = Instance::from_pairs(&[(10.0, 5.0)], 4.0).unwrap();
        let solution = ExhaustiveSolver.run(&instance);
        assert_eq!(solution.value(), 0.0);
        assert!(solution.is_feasible());
    }

    #[test]
    fn test_all_items_fit() {
        let instance =
            Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 60.0).unwrap();
        let solution = ExhaustiveSolver.run(&instance);
        assert!((solution.value() - 280.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "limited to 63 items")]
    fn test_rejects_oversized_instance() {
        let instance = Instance::random(64, 0.5, 1);
        ExhaustiveSolver.run(&instance);
    }
}
