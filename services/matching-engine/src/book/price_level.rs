//! Price level implementation with FIFO queue
//!
//! A price level contains all orders resting at one price of one token
//! side. Orders are kept oldest first to enforce time priority.

use std::collections::VecDeque;
use types::ids::{AccountId, OrderId};
use types::numeric::Quantity;
use types::order::{OrderOrigin, RestingOrder};

/// A price level containing orders at a specific price
///
/// Invariant: `aggregate_quantity` equals the sum of the queued orders'
/// quantities, and no queued order has zero quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<RestingOrder>,
    /// Total quantity available at this level
    aggregate_quantity: Quantity,
}

/// The part of a resting order consumed by `reduce_oldest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed {
    pub order_id: OrderId,
    pub account_id: AccountId,
    pub origin: OrderOrigin,
    pub quantity: Quantity,
    /// The order was fully consumed and left the queue
    pub exhausted: bool,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the back of the queue (time priority)
    ///
    /// Returns the order's zero-based queue position.
    pub fn enqueue(&mut self, order: RestingOrder) -> usize {
        assert!(order.quantity > 0, "cannot rest an empty order");
        self.aggregate_quantity += order.quantity;
        self.orders.push_back(order);
        self.orders.len() - 1
    }

    /// Peek at the oldest order without removing it
    pub fn peek_oldest(&self) -> Option<&RestingOrder> {
        self.orders.front()
    }

    /// Consume `amount` from the oldest order
    ///
    /// Shrinks the order in place, or removes it when `amount` consumes it
    /// fully. Returns `None` if the level is empty.
    ///
    /// # Panics
    /// Panics if `amount` is zero or exceeds the oldest order's quantity.
    pub fn reduce_oldest(&mut self, amount: Quantity) -> Option<Consumed> {
        let front = self.orders.front_mut()?;
        assert!(
            amount > 0 && amount <= front.quantity,
            "reduce amount {} out of range for order of {}",
            amount,
            front.quantity
        );

        front.quantity -= amount;
        self.aggregate_quantity -= amount;

        let exhausted = front.quantity == 0;
        let consumed = Consumed {
            order_id: front.order_id,
            account_id: front.account_id.clone(),
            origin: front.origin,
            quantity: amount,
            exhausted,
        };
        if exhausted {
            self.orders.pop_front();
        }
        Some(consumed)
    }

    /// Whether any quantity rests here
    pub fn has_liquidity(&self) -> bool {
        self.aggregate_quantity > 0
    }

    /// Get the total quantity at this price level
    pub fn aggregate_quantity(&self) -> Quantity {
        self.aggregate_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders oldest first
    pub fn orders(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.iter()
    }

    /// Recompute the aggregate from the queue and compare
    pub fn check_invariant(&self) -> bool {
        let sum: Quantity = self.orders.iter().map(|order| order.quantity).sum();
        sum == self.aggregate_quantity && self.orders.iter().all(|order| order.quantity > 0)
    }
}
