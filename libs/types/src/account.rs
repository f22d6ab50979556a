//! Balance entries
//!
//! A `Balance` is the available/locked pair used both for an account's
//! currency and for each side of a token position.

use crate::numeric::Amount;
use serde::{Deserialize, Serialize};

/// Available and locked amounts of one asset
///
/// Invariant: neither bucket ever goes negative. Every method asserts its
/// precondition; a violation means a caller skipped validation and is a
/// programming error, not a business rejection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub available: Amount,
    pub locked: Amount,
}

impl Balance {
    /// Create a balance with everything available
    pub fn new(available: Amount) -> Self {
        Self {
            available,
            locked: 0,
        }
    }

    /// Sum of both buckets
    pub fn total(&self) -> Amount {
        self.available + self.locked
    }

    /// Credit to available (deposit, trade proceeds, minted tokens)
    ///
    /// # Panics
    /// Panics on overflow
    pub fn credit(&mut self, amount: Amount) {
        self.available = self
            .available
            .checked_add(amount)
            .expect("available balance overflow");
    }

    /// Remove from available
    ///
    /// # Panics
    /// Panics if amount exceeds available
    pub fn debit(&mut self, amount: Amount) {
        assert!(amount <= self.available, "Insufficient available balance");
        self.available -= amount;
    }

    /// Lock a portion of available balance
    ///
    /// # Panics
    /// Panics if amount exceeds available
    pub fn lock(&mut self, amount: Amount) {
        assert!(amount <= self.available, "Insufficient available balance");
        self.available -= amount;
        self.locked += amount;
    }

    /// Unlock a portion of locked balance back to available
    ///
    /// # Panics
    /// Panics if amount exceeds locked
    pub fn unlock(&mut self, amount: Amount) {
        assert!(amount <= self.locked, "Insufficient locked balance");
        self.locked -= amount;
        self.available += amount;
    }

    /// Remove from locked (value left the account in a trade)
    ///
    /// # Panics
    /// Panics if amount exceeds locked
    pub fn spend_locked(&mut self, amount: Amount) {
        assert!(amount <= self.locked, "Insufficient locked balance");
        self.locked -= amount;
    }
}
