//! Explicit engine state
//!
//! The ledger and the order book travel together so a single writer can
//! mutate both under one logical transaction.

use crate::book::OrderBook;
use crate::ledger::Ledger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketStore {
    pub(crate) ledger: Ledger,
    pub(crate) book: OrderBook,
}

impl MarketStore {
    /// Empty ledger and empty order book
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Clear every account, position and symbol
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.book.clear();
    }
}
