//! Matching Engine Service
//!
//! Order book and trade execution for a binary-outcome prediction market.
//! Every symbol trades a "yes" and a "no" token whose prices sum to 1000.
//! An unmatched buy of one side rests as supply of the other side at the
//! complementary price, so both ladders stay mutually liquid without a
//! separate cross-matching pass.
//!
//! **Key Invariants:**
//! - Price-time priority: ascending price sweep, FIFO within a level
//! - Level aggregate always equals the sum of its queued orders
//! - Yes supply equals no supply for every symbol
//! - Rejected requests leave ledger and book unchanged

pub mod book;
pub mod matching;
pub mod ledger;
pub mod store;
pub mod snapshot;
pub mod engine;

pub use engine::{BuyOutcome, MatchingEngine, MintOutcome, SellOutcome};
pub use ledger::Ledger;
pub use snapshot::{LedgerSnapshot, LevelSnapshot, OrderBookSnapshot};
pub use store::MarketStore;
