//! Exhaustive search, used as the reference for the optimized solver.

use super::ranking::rank;
use log::debug;
use shares::{Combination, Instrument, Solver};

/// Enumerates every subset of the catalog in O(2^n).
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        Self
    }

    /// Lists every non-empty combination whose cost fits in `max_cost`.
    ///
    /// Each feasible subset appears exactly once. Only the "take" branch is
    /// pruned when the next share would overflow the budget.
    pub fn enumerate_feasible(&self, instruments: &[Instrument], max_cost: u64) -> Vec<Combination> {
        let mut found = Vec::new();
        let mut running = Combination::new();
        explore(instruments, max_cost, 0, &mut running, &mut found);
        debug!(
            "Enumerated {} feasible combinations over {} shares",
            found.len(),
            instruments.len()
        );
        found
    }
}

fn explore(
    instruments: &[Instrument],
    max_cost: u64,
    index: usize,
    running: &mut Combination,
    found: &mut Vec<Combination>,
) {
    let Some(share) = instruments.get(index) else {
        if !running.is_empty() {
            found.push(running.clone());
        }
        return;
    };

    if running.total_cost() + share.get_cost() <= max_cost {
        running.add(share.clone());
        explore(instruments, max_cost, index + 1, running, found);
        running.remove(share);
    }

    explore(instruments, max_cost, index + 1, running, found);
}

impl Solver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn solve(&self, instruments: &[Instrument], max_cost: u64) -> Combination {
        rank(self.enumerate_feasible(instruments, max_cost))
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}
