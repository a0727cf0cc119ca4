//! Branch and Bound (BnB).
//!
//! Exact solver for the 0/1 knapsack problem. The search tree is the
//! implicit binary tree in which level `d` decides inclusion of item `d` of
//! the ratio-sorted order. Nodes are expanded best-first, highest
//! fractional-relaxation bound next; since the bound never underestimates
//! the best value reachable from a node, any node whose bound cannot beat
//! the best solution found so far is pruned without losing optimality.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"
//! - Dantzig (1957), "Discrete-Variable Extremum Problems" (the fractional
//!   relaxation used for the bound)

mod bound;
mod config;
mod runner;

pub use config::BnbConfig;
pub use runner::{BnbResult, BnbSolver};
