//! Price ladder for one token side of one symbol
//!
//! All 19 levels are always present, stored in a fixed array indexed by
//! `Price::index()`. Because a `Price` can only hold a legal level, every
//! lookup is an in-bounds O(1) access.

use types::numeric::{Price, Quantity, PRICE_LEVELS};
use types::order::RestingOrder;

use super::price_level::{Consumed, PriceLevel};

/// The 19 price levels of one token side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLadder {
    levels: [PriceLevel; PRICE_LEVELS],
}

impl PriceLadder {
    /// Create a ladder with every level empty
    pub fn new() -> Self {
        Self {
            levels: std::array::from_fn(|_| PriceLevel::new()),
        }
    }

    /// Rest an order at `price`; returns its queue position
    pub fn enqueue(&mut self, price: Price, order: RestingOrder) -> usize {
        self.levels[price.index()].enqueue(order)
    }

    /// Oldest order resting at `price`
    pub fn peek_oldest(&self, price: Price) -> Option<&RestingOrder> {
        self.levels[price.index()].peek_oldest()
    }

    /// Consume `amount` from the oldest order at `price`
    pub fn reduce_oldest(&mut self, price: Price, amount: Quantity) -> Option<Consumed> {
        self.levels[price.index()].reduce_oldest(amount)
    }

    pub fn has_liquidity(&self, price: Price) -> bool {
        self.levels[price.index()].has_liquidity()
    }

    pub fn level(&self, price: Price) -> &PriceLevel {
        &self.levels[price.index()]
    }

    /// Levels paired with their prices, cheapest first
    pub fn levels(&self) -> impl Iterator<Item = (Price, &PriceLevel)> {
        Price::all().zip(self.levels.iter())
    }

    /// Total quantity resting at or below `limit`
    pub fn depth_up_to(&self, limit: Price) -> Quantity {
        Price::up_to(limit)
            .map(|price| self.levels[price.index()].aggregate_quantity())
            .sum()
    }

    /// Lowest price with liquidity
    pub fn best_price(&self) -> Option<Price> {
        self.levels()
            .find(|(_, level)| level.has_liquidity())
            .map(|(price, _)| price)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(PriceLevel::is_empty)
    }
}

impl Default for PriceLadder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::AccountId;
    use types::order::OrderOrigin;

    fn sell(account: &str, quantity: Quantity) -> RestingOrder {
        RestingOrder::new(AccountId::try_new(account).unwrap(), quantity, OrderOrigin::Sell)
    }

    fn price(value: u64) -> Price {
        Price::new(value).unwrap()
    }

    #[test]
    fn test_new_ladder_has_all_levels_empty() {
        let ladder = PriceLadder::new();
        assert_eq!(ladder.levels().count(), 19);
        assert!(ladder.is_empty());
        assert_eq!(ladder.best_price(), None);
    }

    #[test]
    fn test_enqueue_and_peek() {
        let mut ladder = PriceLadder::new();
        ladder.enqueue(price(300), sell("alice", 5));

        assert!(ladder.has_liquidity(price(300)));
        assert!(!ladder.has_liquidity(price(350)));
        assert_eq!(ladder.peek_oldest(price(300)).unwrap().quantity, 5);
        assert_eq!(ladder.level(price(300)).aggregate_quantity(), 5);
    }

    #[test]
    fn test_best_price_is_cheapest() {
        let mut ladder = PriceLadder::new();
        ladder.enqueue(price(700), sell("alice", 1));
        ladder.enqueue(price(250), sell("bob", 2));

        assert_eq!(ladder.best_price(), Some(price(250)));
    }

    #[test]
    fn test_depth_up_to_is_inclusive() {
        let mut ladder = PriceLadder::new();
        ladder.enqueue(price(100), sell("alice", 1));
        ladder.enqueue(price(200), sell("bob", 2));
        ladder.enqueue(price(250), sell("carol", 4));

        assert_eq!(ladder.depth_up_to(price(200)), 3);
        assert_eq!(ladder.depth_up_to(price(950)), 7);
        assert_eq!(ladder.depth_up_to(price(50)), 0);
    }

    #[test]
    fn test_reduce_oldest_at_price() {
        let mut ladder = PriceLadder::new();
        ladder.enqueue(price(400), sell("alice", 3));

        let consumed = ladder.reduce_oldest(price(400), 3).unwrap();
        assert!(consumed.exhausted);
        assert!(ladder.is_empty());
        assert!(ladder.reduce_oldest(price(400), 1).is_none());
    }
}
