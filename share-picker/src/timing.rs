use shares::{Instrument, Solver};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `solver` `rounds` times on the same catalog and returns the total
/// elapsed time.
pub fn time_solver(
    solver: &dyn Solver,
    instruments: &[Instrument],
    max_cost: u64,
    rounds: u32,
) -> Duration {
    let start = Instant::now();
    for _ in 0..rounds {
        black_box(solver.solve(black_box(instruments), max_cost));
    }
    start.elapsed()
}
