//! # Shares Core Library
//!
//! Budgeted share selection: pick the shares that maximize two-year profit
//! without exceeding a budget.
//!
//! ## Modules
//! - `solver`: exhaustive and dynamic-programming search, ranking.
//! - `catalog`: CSV catalog loading for the supported layouts.
//! - `report`: table, grid and JSON renderings.

pub mod catalog;
pub mod report;
pub mod solver;

pub use catalog::{load_catalog, CatalogError, CatalogLayout};
pub use solver::{BruteForceSolver, OptimizedSolver, StepPolicy};
