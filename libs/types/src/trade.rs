//! Fill records
//!
//! A fill is one resting order (fully or partially) consumed by a buy sweep.

use crate::ids::{AccountId, OrderId, Symbol};
use crate::numeric::{Amount, Price, Quantity};
use crate::order::{OrderOrigin, TokenSide};
use serde::{Deserialize, Serialize};

/// A single execution against a resting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Monotonic sequence number assigned by the engine
    pub sequence: u64,
    pub symbol: Symbol,
    /// Ladder the sweep walked (the token the taker receives)
    pub side: TokenSide,
    /// Level price the fill executed at
    pub price: Price,
    pub quantity: Quantity,
    pub maker_order_id: OrderId,
    pub maker_account_id: AccountId,
    pub maker_origin: OrderOrigin,
    pub taker_account_id: AccountId,
    /// Whether the maker order left the book
    pub maker_exhausted: bool,
}

impl Fill {
    /// Currency the taker pays for this fill
    pub fn notional(&self) -> Amount {
        self.quantity * self.price.value()
    }
}
