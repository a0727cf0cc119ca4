//! BnB configuration.

/// Configuration for the Branch and Bound solver.
///
/// # Examples
///
/// ```
/// use knapsack_solvers::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_max_nodes(100_000)
///     .with_warm_start(false);
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Maximum number of nodes expanded (hard budget). 0 = no limit.
    ///
    /// When the budget runs out the search stops and returns the best
    /// solution found so far as a best-effort, possibly suboptimal result.
    pub max_nodes: usize,

    /// Seed the incumbent with the greedy heuristic before the search.
    ///
    /// Tightens pruning from the first node on; never changes the value of
    /// the returned solution.
    pub warm_start: bool,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            max_nodes: 0,
            warm_start: true,
        }
    }
}

impl BnbConfig {
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }
}
