//! Search strategies over a share catalog.
//!
//! Both solvers implement [`shares::Solver`] and can be swapped freely; the
//! brute-force one is the oracle the optimized one is checked against.

pub mod axis;
pub mod brute_force;
pub mod optimized;
pub mod ranking;

pub use axis::{BudgetAxis, StepPolicy, DEFAULT_STEP};
pub use brute_force::BruteForceSolver;
pub use optimized::{DpTable, OptimizedSolver};
pub use ranking::{rank, top};
