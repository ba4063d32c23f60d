use crate::model::{combination::Combination, instrument::Instrument};

/// A strategy that picks the shares to buy under a budget.
pub trait Solver {
    /// Short human-readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the combination with the highest total profit whose cost
    /// does not exceed `max_cost`.
    ///
    /// # Arguments
    ///
    /// * `instruments` - The catalog, in the order the solver should visit it.
    /// * `max_cost` - The budget, in the same unit as the instrument costs.
    ///
    /// # Returns
    ///
    /// * `Combination` - The selection, empty when nothing fits.
    fn solve(&self, instruments: &[Instrument], max_cost: u64) -> Combination;
}

impl Solver for Box<dyn Solver> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, instruments: &[Instrument], max_cost: u64) -> Combination {
        (**self).solve(instruments, max_cost)
    }
}
