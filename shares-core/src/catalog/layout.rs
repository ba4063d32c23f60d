//! The historical catalog layouts and how each one maps to cents and rates.

use clap::ValueEnum;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shares::CENTS_PER_EURO;
use std::str::FromStr;

/// Column semantics of a catalog file. Every layout is `id, cost, profit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLayout {
    /// Whole euros, profit as `"17%"`.
    #[default]
    Euros,
    /// Decimal euro price, profit as a percentage number.
    Decimal,
    /// Cost already in cents, profit as a percentage number.
    Cents,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl CatalogLayout {
    /// Converts the raw cost column to signed cents.
    ///
    /// Signed so that the loader can discard non-positive costs instead of
    /// failing on them.
    pub fn parse_cost(self, raw: &str) -> Result<i64, FieldError> {
        match self {
            CatalogLayout::Euros => raw
                .parse::<i64>()
                .map_err(|e| FieldError::new("cost", e.to_string()))?
                .checked_mul(CENTS_PER_EURO as i64)
                .ok_or_else(|| FieldError::new("cost", "out of range")),
            CatalogLayout::Decimal => {
                let price = Decimal::from_str(raw)
                    .map_err(|e| FieldError::new("price", e.to_string()))?;
                (price.round_dp(2) * Decimal::from(CENTS_PER_EURO))
                    .to_i64()
                    .ok_or_else(|| FieldError::new("price", "out of range"))
            }
            CatalogLayout::Cents => raw
                .parse::<i64>()
                .map_err(|e| FieldError::new("cost", e.to_string())),
        }
    }

    /// Converts the raw profit column to a fraction.
    pub fn parse_rate(self, raw: &str) -> Result<Decimal, FieldError> {
        let number = match self {
            CatalogLayout::Euros | CatalogLayout::Cents => raw.trim_end_matches('%').trim(),
            CatalogLayout::Decimal => raw,
        };
        let percent =
            Decimal::from_str(number).map_err(|e| FieldError::new("profit", e.to_string()))?;
        Ok(percent / Decimal::ONE_HUNDRED)
    }
}
