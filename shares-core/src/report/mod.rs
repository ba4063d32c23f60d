//! Human-readable and JSON renderings of solver output.
//!
//! Amounts are stored in cents by the core; everything rendered here is in
//! euros.

pub mod grid;
pub mod table;

pub use grid::render_grid;
pub use table::render_combinations;

use rust_decimal::Decimal;
use shares::{Combination, CENTS_PER_EURO};

const ACTION_PREFIX: &str = "Action-";

/// Shortens catalog ids for display: `Action-12` becomes `A12`.
pub fn short_id(id: &str) -> String {
    match id.strip_prefix(ACTION_PREFIX) {
        Some(rest) => format!("A{}", rest),
        None => id.to_string(),
    }
}

/// Formats an amount in cents as euros with two decimals.
pub fn euros(cents: Decimal) -> String {
    format!("{:.2}", (cents / Decimal::from(CENTS_PER_EURO)).round_dp(2))
}

/// Serializes combinations as a pretty JSON array (amounts in cents).
pub fn render_json(combinations: &[Combination]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(combinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shares::Instrument;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("Action-12"), "A12");
        assert_eq!(short_id("Share-XYZ"), "Share-XYZ");
    }

    #[test]
    fn test_euros() {
        assert_eq!(euros(dec!(24000)), "240.00");
        assert_eq!(euros(dec!(1234.6)), "12.35");
        assert_eq!(euros(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_render_json() {
        let comb: Combination = vec![Instrument::new("X2", 3000, dec!(0.08))]
            .into_iter()
            .collect();
        let json = render_json(&[comb]).unwrap();
        assert!(json.contains("\"X2\""));
        assert!(json.contains("\"total_cost\": 3000"));
    }
}
