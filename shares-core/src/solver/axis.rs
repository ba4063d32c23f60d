//! Discretization of the budget axis for the dynamic-programming solver.
//!
//! Levels form the arithmetic sequence `min_cost, min_cost + step, ...`
//! bounded by the budget. When the sequence does not land on the budget
//! exactly, the budget itself is appended as a final column so that the
//! last column always answers the full-budget query.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shares::Instrument;

/// Step used when the catalog does not define one (all costs equal, or a
/// single share).
pub const DEFAULT_STEP: u64 = 1;

/// How the distance between two budget levels is derived from the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StepPolicy {
    /// Smallest strictly positive gap between two adjacent sorted costs.
    #[default]
    MinGap,
    /// Greatest common divisor of all costs. Always exact.
    Gcd,
}

impl StepPolicy {
    /// Derives the step for a set of costs, `None` when the policy cannot.
    pub fn derive(self, costs: &[u64]) -> Option<u64> {
        match self {
            StepPolicy::MinGap => min_positive_gap(costs),
            StepPolicy::Gcd => {
                let step = costs.iter().copied().fold(0, gcd);
                (step > 0).then_some(step)
            }
        }
    }
}

fn min_positive_gap(costs: &[u64]) -> Option<u64> {
    let mut sorted = costs.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|diff| *diff > 0)
        .min()
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// The discretized budget levels a DP table is evaluated at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAxis {
    min_cost: u64,
    step: u64,
    levels: Vec<u64>,
    /// Number of leading levels that belong to the arithmetic sequence.
    regular: usize,
}

impl BudgetAxis {
    /// Builds the axis for a non-empty catalog.
    ///
    /// Returns `None` for an empty catalog.
    pub fn new(instruments: &[Instrument], max_cost: u64, policy: StepPolicy) -> Option<Self> {
        let costs: Vec<u64> = instruments.iter().map(Instrument::get_cost).collect();
        let min_cost = costs.iter().copied().min()?;
        let step = policy.derive(&costs).unwrap_or(DEFAULT_STEP);

        let mut levels: Vec<u64> = if min_cost <= max_cost {
            (min_cost..=max_cost).step_by(step as usize).collect()
        } else {
            Vec::new()
        };
        let regular = levels.len();
        if levels.last() != Some(&max_cost) {
            levels.push(max_cost);
        }

        Some(Self {
            min_cost,
            step,
            levels,
            regular,
        })
    }

    pub fn min_cost(&self) -> u64 {
        self.min_cost
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn levels(&self) -> &[u64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Maps a leftover budget to the highest regular level not above it.
    ///
    /// Returns `None` when the leftover is below the cheapest share.
    pub fn column_for(&self, budget_left: u64) -> Option<usize> {
        if budget_left < self.min_cost || self.regular == 0 {
            return None;
        }
        let col = ((budget_left - self.min_cost) / self.step) as usize;
        Some(col.min(self.regular - 1))
    }

    /// Whether every cost sits on the grid, which makes the table exact.
    pub fn is_exact_for(&self, instruments: &[Instrument]) -> bool {
        instruments
            .iter()
            .all(|share| share.get_cost() % self.step == 0)
    }
}
