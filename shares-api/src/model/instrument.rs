//! Defines the data model for an investable share.
//!
//! Costs are kept in the smallest currency unit (cents) so that budget
//! comparisons never drift. Profit rates are exact decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type InstrumentId = String;

/// A share that can be bought once, at a fixed cost, for a two-year return.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instrument {
    /// Opaque identifier coming from the catalog (e.g. "Action-12").
    id: InstrumentId,

    /// Acquisition cost in cents.
    cost: u64,

    /// Cumulative two-year return as a fraction (0.17 means 17%).
    profit_rate: Decimal,
}

impl Instrument {
    /// Creates a new Instrument.
    ///
    /// # Arguments
    ///
    /// * `id` - The catalog identifier.
    /// * `cost` - The acquisition cost in cents.
    /// * `profit_rate` - The two-year return as a fraction, not a percentage.
    ///
    /// # Returns
    ///
    /// A new `Instrument` instance.
    pub fn new(id: impl Into<InstrumentId>, cost: u64, profit_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            cost,
            profit_rate,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_cost(&self) -> u64 {
        self.cost
    }

    pub fn get_profit_rate(&self) -> Decimal {
        self.profit_rate
    }

    /// Projected two-year profit in cents: `cost × profit_rate`.
    pub fn profit(&self) -> Decimal {
        Decimal::from(self.cost) * self.profit_rate
    }
}
