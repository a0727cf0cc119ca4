//! Common solver contract.

use crate::problem::{Instance, Solution};

/// A 0/1 knapsack solver strategy.
///
/// Implementations are interchangeable: each consumes a read-only
/// [`Instance`] and returns a feasible [`Solution`]. A solver value holds
/// only its own configuration (never global state), so it can be reused
/// across calls and tested in isolation.
///
/// Solving is total and deterministic: for a well-formed instance no
/// implementation errors, and repeated calls return solutions of equal
/// value.
pub trait Solver {
    /// Solves the given instance, returning a feasible solution.
    fn solve<'i>(&self, instance: &'i Instance) -> Solution<'i>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::BnbSolver;
    use crate::exhaustive::ExhaustiveSolver;
    use crate::greedy::GreedySolver;

    #[test]
    fn test_strategies_are_interchangeable() {
        let instance = Instance::random(12, 0.5, 3);
        let solvers: Vec<Box<dyn Solver>> = vec![
            Box::new(BnbSolver::default()),
            Box::new(GreedySolver),
            Box::new(ExhaustiveSolver),
        ];

        for solver in &solvers {
            let solution = solver.solve(&instance);
            assert!(solution.is_feasible());
            assert!(solution.is_binary());
        }
    }

    #[test]
    fn test_exact_solvers_agree() {
        let instance = Instance::random(14, 0.4, 11);
        let exact = ExhaustiveSolver.solve(&instance);
        let bnb = BnbSolver::default().solve(&instance);
        let greedy = GreedySolver.solve(&instance);

        assert!((bnb.value() - exact.value()).abs() < 1e-9);
        assert!(greedy.value() <= exact.value() + 1e-9);
    }
}
