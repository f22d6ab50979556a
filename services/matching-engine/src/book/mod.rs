//! Order book infrastructure module
//!
//! Contains the FIFO price level, the 19-level price ladder for one token
//! side, and the per-symbol order book registry.

pub mod price_level;
pub mod price_ladder;
pub mod order_book;

pub use price_level::{Consumed, PriceLevel};
pub use price_ladder::PriceLadder;
pub use order_book::{OrderBook, SymbolBook};
