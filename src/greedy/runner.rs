//! Greedy execution.

use log::debug;

use crate::problem::rank::ratio_order;
use crate::problem::{Instance, Solution};
use crate::solver::Solver;

/// Ratio-greedy heuristic for the 0/1 knapsack problem.
///
/// # Examples
///
/// ```
/// use knapsack_solvers::greedy::GreedySolver;
/// use knapsack_solvers::problem::Instance;
/// use knapsack_solvers::solver::Solver;
///
/// let instance = Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0).unwrap();
/// let solution = GreedySolver.solve(&instance);
/// assert_eq!(solution.value(), 160.0); // optimum is 220: greedy is a heuristic
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Builds a solution in one pass over the ratio-sorted items.
    pub fn run<'i>(&self, instance: &'i Instance) -> Solution<'i> {
        let mut solution = Solution::new(instance);
        for item in ratio_order(instance) {
            // A rejected assignment simply leaves the item out.
            solution.assign(item.index, 1);
        }

        debug!(
            "[GREEDY] value {}, weight {}",
            solution.value(),
            solution.weight()
        );
        solution
    }
}

impl Solver for GreedySolver {
    fn solve<'i>(&self, instance: &'i Instance) -> Solution<'i> {
        self.run(instance)
    }
}
