//! Exhaustive enumeration.
//!
//! Evaluates every one of the `2^n` possible assignments and keeps the best
//! feasible one. Exponential, so only viable for small instances; its role
//! here is a baseline and a correctness oracle for the other solvers.

mod runner;

pub use runner::ExhaustiveSolver;
