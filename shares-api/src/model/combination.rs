//! A duplicate-free selection of shares with running totals.

use crate::model::instrument::Instrument;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use thiserror::Error;

/// Contract violations on a [`Combination`].
///
/// These indicate a solver bug rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinationError {
    #[error("share {0} is already part of the combination")]
    AlreadyPresent(String),

    #[error("share {0} is not part of the combination")]
    NotPresent(String),

    #[error("cannot merge combinations sharing {0}")]
    Overlap(String),
}

/// A set of distinct shares with incrementally maintained cost and profit.
///
/// `total_cost` and `total_profit` always equal the fold over the current
/// members; every mutation updates both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    members: HashSet<Instrument>,
    total_cost: u64,
    total_profit: Decimal,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a share, failing if it is already a member.
    pub fn try_add(&mut self, share: Instrument) -> Result<(), CombinationError> {
        if self.members.contains(&share) {
            return Err(CombinationError::AlreadyPresent(share.get_id().to_string()));
        }
        self.total_cost += share.get_cost();
        self.total_profit += share.profit();
        self.members.insert(share);
        Ok(())
    }

    /// Removes a share, failing if it is not a member.
    pub fn try_remove(&mut self, share: &Instrument) -> Result<(), CombinationError> {
        if !self.members.remove(share) {
            return Err(CombinationError::NotPresent(share.get_id().to_string()));
        }
        self.total_cost -= share.get_cost();
        self.total_profit -= share.profit();
        Ok(())
    }

    /// Returns the union of two disjoint combinations.
    pub fn try_merge(&self, other: &Combination) -> Result<Combination, CombinationError> {
        if let Some(shared) = self.members.intersection(&other.members).next() {
            return Err(CombinationError::Overlap(shared.get_id().to_string()));
        }
        Ok(Combination {
            members: self.members.union(&other.members).cloned().collect(),
            total_cost: self.total_cost + other.total_cost,
            total_profit: self.total_profit + other.total_profit,
        })
    }

    /// Adds a share.
    ///
    /// # Panics
    ///
    /// Panics if the share is already a member.
    pub fn add(&mut self, share: Instrument) {
        if let Err(e) = self.try_add(share) {
            panic!("{}", e);
        }
    }

    /// Removes a share.
    ///
    /// # Panics
    ///
    /// Panics if the share is not a member.
    pub fn remove(&mut self, share: &Instrument) {
        if let Err(e) = self.try_remove(share) {
            panic!("{}", e);
        }
    }

    /// Returns the union of two combinations.
    ///
    /// # Panics
    ///
    /// Panics if the member sets overlap.
    pub fn merge(&self, other: &Combination) -> Combination {
        match self.try_merge(other) {
            Ok(merged) => merged,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Projected two-year profit in cents.
    pub fn total_profit(&self) -> Decimal {
        self.total_profit
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, share: &Instrument) -> bool {
        self.members.contains(share)
    }

    /// Iterates over the members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.members.iter()
    }

    /// Members sorted by id.
    pub fn instruments(&self) -> Vec<&Instrument> {
        let mut shares: Vec<&Instrument> = self.members.iter().collect();
        shares.sort();
        shares
    }

    /// Member ids sorted ascending.
    pub fn member_ids(&self) -> Vec<&str> {
        self.instruments()
            .into_iter()
            .map(Instrument::get_id)
            .collect()
    }
}

impl FromIterator<Instrument> for Combination {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        let members: HashSet<Instrument> = iter.into_iter().collect();
        let total_cost = members.iter().map(Instrument::get_cost).sum();
        let total_profit = members.iter().map(Instrument::profit).sum();
        Self {
            members,
            total_cost,
            total_profit,
        }
    }
}

#[derive(Serialize)]
struct CombinationView<'a> {
    shares: Vec<&'a str>,
    total_cost: u64,
    total_profit: Decimal,
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CombinationView {
            shares: self.member_ids(),
            total_cost: self.total_cost,
            total_profit: self.total_profit,
        }
        .serialize(serializer)
    }
}
