pub mod combination;
pub mod instrument;

pub use combination::{Combination, CombinationError};
pub use instrument::{Instrument, InstrumentId};
