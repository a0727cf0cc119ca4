//! Best-first search driver.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use log::{debug, trace};
use ordered_float::OrderedFloat;

use super::bound::fractional_bound;
use super::config::BnbConfig;
use crate::greedy::GreedySolver;
use crate::problem::rank::ratio_order;
use crate::problem::{Instance, Solution};
use crate::solver::Solver;

/// A partial assignment: items `0..depth` of the ratio-sorted order are
/// decided, `taken` holds the original indices of the included ones.
///
/// Nodes are created by exactly one parent expansion, owned by the queue
/// until popped, and discarded after processing. Expanding a node never
/// mutates it.
#[derive(Debug, Clone)]
struct Node {
    depth: usize,
    taken: Vec<usize>,
    value: f64,
    weight: f64,
    bound: f64,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    /// Max-heap on the bound; equal bounds pop the deeper node first, which
    /// reaches complete solutions (and a tighter incumbent) sooner.
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.bound)
            .cmp(&OrderedFloat(other.bound))
            .then_with(|| self.depth.cmp(&other.depth))
    }
}

/// Result of a Branch and Bound run.
#[derive(Debug, Clone)]
pub struct BnbResult<'i> {
    /// Best feasible solution found. Optimal unless `truncated` or
    /// `cancelled` is set.
    pub best: Solution<'i>,

    /// Nodes popped from the queue and branched on.
    pub nodes_expanded: usize,

    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: usize,

    /// Largest queue length observed.
    pub max_queue_len: usize,

    /// Whether the node budget ran out before the queue emptied.
    pub truncated: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Branch and Bound solver for the 0/1 knapsack problem.
///
/// # Examples
///
/// ```
/// use knapsack_solvers::bnb::{BnbConfig, BnbSolver};
/// use knapsack_solvers::problem::Instance;
///
/// let instance = Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0).unwrap();
/// let result = BnbSolver::new(BnbConfig::default()).run(&instance);
/// assert_eq!(result.best.value(), 220.0);
/// assert!(!result.truncated);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BnbSolver {
    config: BnbConfig,
}

impl BnbSolver {
    pub fn new(config: BnbConfig) -> Self {
        Self { config }
    }

    /// Runs the search to completion (or until the node budget runs out).
    pub fn run<'i>(&self, instance: &'i Instance) -> BnbResult<'i> {
        self.run_with_cancel(instance, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The token is checked once per popped node; on cancellation the
    /// incumbent found so far is returned with `cancelled` set.
    pub fn run_with_cancel<'i>(
        &self,
        instance: &'i Instance,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BnbResult<'i> {
        let order = ratio_order(instance);
        let n = order.len();
        let capacity = instance.capacity();

        debug!("[BNB] {} items, capacity {}", n, capacity);

        let mut incumbent = if self.config.warm_start {
            let greedy = GreedySolver.run(instance);
            trace!("[BNB] warm start incumbent: value {}", greedy.value());
            greedy
        } else {
            Solution::new(instance)
        };

        let mut queue = BinaryHeap::new();
        queue.push(Node {
            depth: 0,
            taken: Vec::new(),
            value: 0.0,
            weight: 0.0,
            bound: fractional_bound(&order, capacity, 0, 0.0, 0.0),
        });

        let mut nodes_expanded = 0;
        let mut nodes_pruned = 0;
        let mut max_queue_len = 1;
        let mut truncated = false;
        let mut cancelled = false;

        while let Some(node) = queue.pop() {
            if let Some(flag) = &cancel {
                if flag.load(AtomicOrdering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if self.config.max_nodes > 0 && nodes_expanded >= self.config.max_nodes {
                truncated = true;
                break;
            }

            // No completion of this node can beat the incumbent. The bound
            // is re-checked here: the incumbent may have improved since the
            // node was enqueued.
            if node.bound <= incumbent.value() {
                nodes_pruned += 1;
                continue;
            }

            // All items decided; the node's value was folded into the
            // incumbent when it was created.
            if node.depth == n {
                continue;
            }

            nodes_expanded += 1;
            let item = order[node.depth];

            // Child taking item `depth`, only if it still fits.
            let with_weight = node.weight + item.weight;
            if with_weight <= capacity {
                let with_value = node.value + item.value;
                let mut with_taken = node.taken.clone();
                with_taken.push(item.index);
                let bound =
                    fractional_bound(&order, capacity, node.depth + 1, with_value, with_weight);

                if with_value > incumbent.value() {
                    incumbent = solution_of(instance, &with_taken);
                    trace!("[BNB] new incumbent: value {}", incumbent.value());
                }
                if bound > incumbent.value() {
                    queue.push(Node {
                        depth: node.depth + 1,
                        taken: with_taken,
                        value: with_value,
                        weight: with_weight,
                        bound,
                    });
                } else {
                    nodes_pruned += 1;
                }
            }

            // Child skipping item `depth`. Same value and weight, so it can
            // never improve the incumbent by itself.
            let bound = fractional_bound(&order, capacity, node.depth + 1, node.value, node.weight);
            if bound > incumbent.value() {
                queue.push(Node {
                    depth: node.depth + 1,
                    taken: node.taken,
                    value: node.value,
                    weight: node.weight,
                    bound,
                });
            } else {
                nodes_pruned += 1;
            }

            max_queue_len = max_queue_len.max(queue.len());
        }

        debug!(
            "[BNB] done: value {}, {} expanded, {} pruned, peak queue {}",
            incumbent.value(),
            nodes_expanded,
            nodes_pruned,
            max_queue_len
        );

        BnbResult {
            best: incumbent,
            nodes_expanded,
            nodes_pruned,
            max_queue_len,
            truncated,
            cancelled,
        }
    }
}

impl Solver for BnbSolver {
    fn solve<'i>(&self, instance: &'i Instance) -> Solution<'i> {
        self.run(instance).best
    }
}

/// The solution taking exactly the items in `taken` (original indices).
fn solution_of<'i>(instance: &'i Instance, taken: &[usize]) -> Solution<'i> {
    let mut solution = Solution::new(instance);
    for &index in taken {
        let applied = solution.assign(index, 1);
        debug_assert!(applied, "incumbent assignment exceeds capacity");
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveSolver;
    use proptest::prelude::*;

    fn solve_value(pairs: &[(f64, f64)], capacity: f64) -> f64 {
        let instance = Instance::from_pairs(pairs, capacity).unwrap();
        BnbSolver::default().run(&instance).best.value()
    }

    #[test]
    fn test_known_optimum() {
        let value = solve_value(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0);
        assert!((value - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_optimum_without_warm_start() {
        let instance =
            Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0).unwrap();
        let solver = BnbSolver::new(BnbConfig::default().with_warm_start(false));
        let result = solver.run(&instance);
        assert!((result.best.value() - 220.0).abs() < 1e-9);
        assert_eq!(result.best.quantities(), &[0, 1, 1]);
        assert!(result.nodes_expanded > 0);
        assert!(result.max_queue_len >= 1);
    }

    #[test]
    fn test_single_item_too_heavy() {
        let value = solve_value(&[(10.0, 5.0)], 4.0);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(Vec::new(), 5.0).unwrap();
        let result = BnbSolver::default().run(&instance);
        assert_eq!(result.best.value(), 0.0);
        assert!(!result.truncated);
    }

    #[test]
    fn test_all_items_fit() {
        let value = solve_value(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 60.0);
        assert!((value - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_ranked_item_can_be_taken() {
        // Optimum is the single worst-ratio item; a search that never
        // branches on the last sorted item would miss it.
        let value = solve_value(&[(10.0, 1.0), (50.0, 10.0)], 10.0);
        assert!((value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_ties_are_deterministic() {
        let instance = Instance::from_pairs(&[(50.0, 10.0), (50.0, 10.0)], 10.0).unwrap();
        let solver = BnbSolver::default();
        let a = solver.run(&instance).best;
        let b = solver.run(&instance).best;
        assert!((a.value() - 50.0).abs() < 1e-9);
        assert!((a.value() - b.value()).abs() < 1e-12);
        assert_eq!(a.quantities(), b.quantities());
    }

    #[test]
    fn test_monotonic_in_item_value() {
        let base = solve_value(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0);
        for bumped in [
            solve_value(&[(90.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0),
            solve_value(&[(60.0, 10.0), (150.0, 20.0), (120.0, 30.0)], 50.0),
            solve_value(&[(60.0, 10.0), (100.0, 20.0), (200.0, 30.0)], 50.0),
        ] {
            assert!(bumped >= base - 1e-9);
        }
    }

    #[test]
    fn test_node_budget_returns_best_effort() {
        let instance = Instance::random(30, 0.5, 9);
        let solver = BnbSolver::new(BnbConfig::default().with_max_nodes(1).with_warm_start(false));
        let result = solver.run(&instance);
        assert!(result.truncated);
        assert!(result.nodes_expanded <= 1);
        assert!(result.best.is_feasible());
    }

    #[test]
    fn test_cancellation() {
        let instance = Instance::random(30, 0.5, 9);
        // Set the flag up front so cancellation is deterministic no matter
        // how fast the search runs.
        let cancel = Arc::new(AtomicBool::new(true));
        let result = BnbSolver::default().run_with_cancel(&instance, Some(cancel));
        assert!(result.cancelled);
        assert!(result.best.is_feasible());
    }

    fn arb_pairs() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((1u32..=100u32, 1u32..=40u32), 0..12)
            .prop_map(|v| v.into_iter().map(|(c, w)| (c as f64, w as f64)).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn bnb_matches_exhaustive(pairs in arb_pairs(), capacity in 1u32..=150u32) {
            let instance = Instance::from_pairs(&pairs, capacity as f64).unwrap();
            let exact = ExhaustiveSolver.run(&instance);
            let result = BnbSolver::default().run(&instance);

            prop_assert!((result.best.value() - exact.value()).abs() < 1e-9);
            prop_assert!(result.best.is_feasible());
            prop_assert!(!result.truncated && !result.cancelled);
        }

        #[test]
        fn warm_start_never_changes_the_value(pairs in arb_pairs(), capacity in 1u32..=150u32) {
            let instance = Instance::from_pairs(&pairs, capacity as f64).unwrap();
            let warm = BnbSolver::new(BnbConfig::default()).run(&instance);
            let cold = BnbSolver::new(BnbConfig::default().with_warm_start(false)).run(&instance);
            prop_assert!((warm.best.value() - cold.best.value()).abs() < 1e-9);
        }
    }
}
