//! Solvers for the 0/1 knapsack problem.
//!
//! Provides independent, interchangeable solver strategies behind a common
//! [`solver::Solver`] contract:
//!
//! - **Branch and Bound**: exact best-first search driven by a
//!   fractional-relaxation upper bound. Prunes every subtree that provably
//!   cannot beat the best solution found so far.
//! - **Greedy**: constructive heuristic that packs items in descending
//!   value-to-weight order. Fast, feasible, no optimality guarantee.
//! - **Exhaustive**: full enumeration of all `2^n` assignments. Only viable
//!   for small instances; doubles as a correctness oracle in tests.
//!
//! # Architecture
//!
//! Problem data (`Item`, `Instance`, `Solution`) lives in [`problem`] and is
//! shared by all solvers. Each solver is its own module holding only the
//! state needed for one `solve` call, so solvers can be reused and tested in
//! isolation.
//!
//! # Examples
//!
//! ```
//! use knapsack_solvers::bnb::BnbSolver;
//! use knapsack_solvers::problem::Instance;
//! use knapsack_solvers::solver::Solver;
//!
//! let instance = Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)], 50.0)?;
//! let best = BnbSolver::default().solve(&instance);
//! assert_eq!(best.value(), 220.0);
//! # Ok::<(), knapsack_solvers::problem::InstanceError>(())
//! ```

pub mod bnb;
pub mod exhaustive;
pub mod greedy;
pub mod problem;
pub mod solver;
