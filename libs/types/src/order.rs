//! Token sides and resting orders

use crate::ids::{AccountId, OrderId};
use crate::numeric::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which outcome token an order trades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSide {
    Yes,
    No,
}

impl TokenSide {
    /// Get the complementary side
    pub fn opposite(&self) -> Self {
        match self {
            TokenSide::Yes => TokenSide::No,
            TokenSide::No => TokenSide::Yes,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSide::Yes => "yes",
            TokenSide::No => "no",
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a resting order came to be on the ladder
///
/// Determines how the maker is settled when the order is matched away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOrigin {
    /// Placed directly as a sell; the maker's tokens are locked
    Sell,
    /// Unmatched remainder of a buy, rested on the complementary side at the
    /// complementary price; the maker's currency is locked
    Buy,
}

/// An order waiting in a price level queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub account_id: AccountId,
    pub quantity: Quantity,
    pub origin: OrderOrigin,
}

impl RestingOrder {
    /// Create a resting order with a fresh id
    ///
    /// # Panics
    /// Panics on a zero quantity; callers validate before resting.
    pub fn new(account_id: AccountId, quantity: Quantity, origin: OrderOrigin) -> Self {
        assert!(quantity > 0, "resting order quantity must be positive");
        Self {
            order_id: OrderId::new(),
            account_id,
            quantity,
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(TokenSide::Yes.opposite(), TokenSide::No);
        assert_eq!(TokenSide::No.opposite(), TokenSide::Yes);
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&TokenSide::Yes).unwrap(), "\"yes\"");
        let side: TokenSide = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(side, TokenSide::No);
        assert!(serde_json::from_str::<TokenSide>("\"maybe\"").is_err());
    }

    #[test]
    fn test_origin_serialization() {
        assert_eq!(serde_json::to_string(&OrderOrigin::Buy).unwrap(), "\"buy\"");
    }

    #[test]
    #[should_panic(expected = "resting order quantity must be positive")]
    fn test_zero_quantity_order_panics() {
        RestingOrder::new(AccountId::try_new("user1").unwrap(), 0, OrderOrigin::Sell);
    }
}
