//! Sweep planning
//!
//! Walks one ladder from the cheapest level up to the buyer's limit and
//! decides which resting orders a buy will consume, without touching the
//! book. The plan is applied afterwards by the executor.

use types::ids::{AccountId, OrderId};
use types::numeric::{Price, Quantity};
use types::order::OrderOrigin;

use crate::book::PriceLadder;

/// One resting order the sweep will consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFill {
    pub price: Price,
    pub quantity: Quantity,
    pub order_id: OrderId,
    pub account_id: AccountId,
    pub origin: OrderOrigin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    /// Fills in execution order: ascending price, FIFO within a level
    pub fills: Vec<PlannedFill>,
    pub executed: Quantity,
    pub remaining: Quantity,
}

/// Whether a buy limited at `limit` reaches a resting level at `level`
pub fn crosses(limit: Price, level: Price) -> bool {
    limit >= level
}

/// Plan a buy of `quantity` up to `limit` against `ladder`
pub fn plan_sweep(ladder: &PriceLadder, limit: Price, quantity: Quantity) -> SweepPlan {
    let mut remaining = quantity;
    let mut fills = Vec::new();

    for price in Price::up_to(limit) {
        if remaining == 0 {
            break;
        }
        debug_assert!(crosses(limit, price));

        let level = ladder.level(price);
        if !level.has_liquidity() {
            continue;
        }

        for order in level.orders() {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(order.quantity);
            fills.push(PlannedFill {
                price,
                quantity: take,
                order_id: order.order_id,
                account_id: order.account_id.clone(),
                origin: order.origin,
            });
            remaining -= take;
        }
    }

    let executed = quantity - remaining;
    debug_assert_eq!(executed, quantity.min(ladder.depth_up_to(limit)));
    SweepPlan {
        fills,
        executed,
        remaining,
    }
}
