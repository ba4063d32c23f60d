//! Dynamic-programming solver over a discretized budget axis.
//!
//! The table is a row-major arena of compact cells: each cell keeps the
//! best cost and profit reachable with the first `row + 1` shares at one
//! budget level, plus a link telling how it was built. The winning
//! combination is only materialized once, by walking links back from the
//! bottom-right cell.

use super::axis::{BudgetAxis, StepPolicy};
use log::{debug, warn};
use rust_decimal::Decimal;
use shares::{Combination, Instrument, Solver};

/// How a cell was obtained from the previous row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// Nothing selected.
    Empty,
    /// Same column of the previous row, current share skipped.
    Carry,
    /// Current share taken, plus the previous row at `rest` if any.
    Take { rest: Option<usize> },
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: u64,
    profit: Decimal,
    link: Link,
}

impl Cell {
    const EMPTY: Cell = Cell {
        cost: 0,
        profit: Decimal::ZERO,
        link: Link::Empty,
    };
}

/// A filled DP table, kept around for inspection.
#[derive(Debug, Clone)]
pub struct DpTable {
    axis: BudgetAxis,
    rows: usize,
    cells: Vec<Cell>,
}

impl DpTable {
    fn fill(instruments: &[Instrument], axis: BudgetAxis) -> Self {
        let rows = instruments.len();
        let cols = axis.len();
        let mut cells = Vec::with_capacity(rows * cols);

        for (row, share) in instruments.iter().enumerate() {
            let cost = share.get_cost();
            let profit = share.profit();

            for (col, &level) in axis.levels().iter().enumerate() {
                if row == 0 {
                    let cell = if cost <= level {
                        Cell {
                            cost,
                            profit,
                            link: Link::Take { rest: None },
                        }
                    } else {
                        Cell::EMPTY
                    };
                    cells.push(cell);
                    continue;
                }

                let above = cells[(row - 1) * cols + col];
                let carried = Cell {
                    link: Link::Carry,
                    ..above
                };

                let Some(budget_left) = level.checked_sub(cost) else {
                    cells.push(carried);
                    continue;
                };

                let rest = axis.column_for(budget_left);
                let (rest_cost, rest_profit) = match rest {
                    Some(c) => {
                        let prev = cells[(row - 1) * cols + c];
                        (prev.cost, prev.profit)
                    }
                    None => (0, Decimal::ZERO),
                };
                let candidate = Cell {
                    cost: cost + rest_cost,
                    profit: profit + rest_profit,
                    link: Link::Take { rest },
                };

                // Ties keep the newly considered share.
                if candidate.profit >= above.profit {
                    cells.push(candidate);
                } else {
                    cells.push(carried);
                }
            }
        }

        Self { axis, rows, cells }
    }

    fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols() + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.axis.len()
    }

    pub fn levels(&self) -> &[u64] {
        self.axis.levels()
    }

    pub fn axis(&self) -> &BudgetAxis {
        &self.axis
    }

    /// Best profit reachable with shares `0..=row` at budget level `col`.
    pub fn profit(&self, row: usize, col: usize) -> Decimal {
        self.cell(row, col).profit
    }

    /// Total cost of the best selection at `(row, col)`.
    pub fn cost(&self, row: usize, col: usize) -> u64 {
        self.cell(row, col).cost
    }

    /// Rebuilds the combination stored at `(row, col)`.
    pub fn combination_at(&self, instruments: &[Instrument], row: usize, col: usize) -> Combination {
        let mut picked = Combination::new();
        let mut position = Some((row, col));

        while let Some((r, c)) = position {
            position = match self.cell(r, c).link {
                Link::Empty => None,
                Link::Carry => r.checked_sub(1).map(|up| (up, c)),
                Link::Take { rest } => {
                    picked.add(instruments[r].clone());
                    match (r.checked_sub(1), rest) {
                        (Some(up), Some(rest)) => Some((up, rest)),
                        _ => None,
                    }
                }
            };
        }

        picked
    }

    /// The answer: all shares, full budget.
    pub fn best(&self, instruments: &[Instrument]) -> Combination {
        if self.rows == 0 || self.cols() == 0 {
            return Combination::new();
        }
        self.combination_at(instruments, self.rows - 1, self.cols() - 1)
    }
}

/// Finds the best combination in O(n × m), m being the number of budget levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedSolver {
    policy: StepPolicy,
}

impl OptimizedSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StepPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    /// Fills the table for a catalog, `None` when the catalog is empty.
    pub fn build_table(&self, instruments: &[Instrument], max_cost: u64) -> Option<DpTable> {
        let axis = BudgetAxis::new(instruments, max_cost, self.policy)?;
        if !axis.is_exact_for(instruments) {
            warn!(
                "Budget step {} does not divide every share cost; the selection may be suboptimal",
                axis.step()
            );
        }
        debug!(
            "Filling {}x{} table (min cost {}, step {})",
            instruments.len(),
            axis.len(),
            axis.min_cost(),
            axis.step()
        );
        Some(DpTable::fill(instruments, axis))
    }
}

impl Solver for OptimizedSolver {
    fn name(&self) -> &'static str {
        "optimized"
    }

    fn solve(&self, instruments: &[Instrument], max_cost: u64) -> Combination {
        match self.build_table(instruments, max_cost) {
            Some(table) => table.best(instruments),
            None => Combination::new(),
        }
    }
}
