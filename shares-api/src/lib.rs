//! # Shares API
//!
//! Data model shared by the solvers and the command-line tool.
//!
//! ## Modules
//! - `model`: `Instrument` and `Combination`.
//! - `traits`: the `Solver` seam both search strategies implement.

pub mod model;
pub mod traits;

pub use model::combination::{Combination, CombinationError};
pub use model::instrument::{Instrument, InstrumentId};
pub use traits::solver::Solver;

/// Number of cents in one euro.
pub const CENTS_PER_EURO: u64 = 100;
