//! Discrete prices and integer quantities
//!
//! Prices are probabilities in thousandths restricted to the 19 levels
//! 50, 100, ..., 950. A yes price `p` and its no price `1000 - p` always
//! sum to [`PRICE_TOTAL`]. Costs are exact integer products; nothing here
//! ever divides.

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token or order quantity (whole units)
pub type Quantity = u64;

/// Currency amount (smallest currency unit)
pub type Amount = u64;

/// Lowest legal price level
pub const MIN_PRICE: u64 = 50;
/// Highest legal price level
pub const MAX_PRICE: u64 = 950;
/// Distance between adjacent price levels
pub const PRICE_STEP: u64 = 50;
/// Sum of complementary yes/no prices
pub const PRICE_TOTAL: u64 = 1000;
/// Number of price levels per token side
pub const PRICE_LEVELS: usize = ((MAX_PRICE - MIN_PRICE) / PRICE_STEP + 1) as usize;

/// One of the 19 legal price levels
///
/// Construction validates the level, so every `Price` in the system is a
/// legal ladder index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl Price {
    pub const MIN: Price = Price(MIN_PRICE);
    pub const MAX: Price = Price(MAX_PRICE);

    /// Validate a raw price
    pub fn new(value: u64) -> Result<Self, EngineError> {
        if !(MIN_PRICE..=MAX_PRICE).contains(&value) || value % PRICE_STEP != 0 {
            return Err(EngineError::InvalidPrice { price: value });
        }
        Ok(Self(value))
    }

    /// Price at ladder slot `index`
    ///
    /// # Panics
    /// Panics if `index >= PRICE_LEVELS`
    pub fn from_index(index: usize) -> Self {
        assert!(index < PRICE_LEVELS, "price index {index} out of range");
        Self(MIN_PRICE + index as u64 * PRICE_STEP)
    }

    /// Ladder slot of this price: `(price - 50) / 50`
    pub fn index(&self) -> usize {
        ((self.0 - MIN_PRICE) / PRICE_STEP) as usize
    }

    /// The complementary price `1000 - price`, always another legal level
    pub fn complement(&self) -> Self {
        Self(PRICE_TOTAL - self.0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// All levels from the cheapest up to and including `limit`, ascending
    pub fn up_to(limit: Price) -> impl Iterator<Item = Price> {
        (0..=limit.index()).map(Price::from_index)
    }

    /// All 19 levels, ascending
    pub fn all() -> impl Iterator<Item = Price> {
        (0..PRICE_LEVELS).map(Price::from_index)
    }

    /// Cost of `quantity` units at this price
    pub fn cost(&self, quantity: Quantity) -> Result<Amount, EngineError> {
        checked_cost(quantity, self.0)
    }
}

impl TryFrom<u64> for Price {
    type Error = EngineError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `quantity * unit_price`, reporting overflow as invalid input
pub fn checked_cost(quantity: Quantity, unit_price: u64) -> Result<Amount, EngineError> {
    quantity.checked_mul(unit_price).ok_or_else(|| {
        EngineError::InvalidInput(format!(
            "cost of {quantity} units at {unit_price} overflows"
        ))
    })
}
