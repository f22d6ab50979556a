//! Read-only views for the reporting layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::account::Balance;
use types::ids::{AccountId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::RestingOrder;
use types::position::TokenPosition;

use crate::book::{PriceLadder, SymbolBook};

/// One price level with its queue, oldest order first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSnapshot {
    pub price: Price,
    pub total: Quantity,
    pub orders: Vec<RestingOrder>,
}

/// Both ladders of a symbol, all 19 levels each, cheapest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookSnapshot {
    pub symbol: Symbol,
    /// Cheapest yes level with liquidity
    pub best_yes: Option<Price>,
    /// Cheapest no level with liquidity
    pub best_no: Option<Price>,
    pub yes: Vec<LevelSnapshot>,
    pub no: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    pub fn capture(symbol: &Symbol, book: &SymbolBook) -> Self {
        Self {
            symbol: symbol.clone(),
            best_yes: book.yes.best_price(),
            best_no: book.no.best_price(),
            yes: ladder_levels(&book.yes),
            no: ladder_levels(&book.no),
        }
    }
}

fn ladder_levels(ladder: &PriceLadder) -> Vec<LevelSnapshot> {
    ladder
        .levels()
        .map(|(price, level)| LevelSnapshot {
            price,
            total: level.aggregate_quantity(),
            orders: level.orders().cloned().collect(),
        })
        .collect()
}

/// Currency balance and token positions of one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub account_id: AccountId,
    pub balance: Balance,
    pub positions: BTreeMap<Symbol, TokenPosition>,
}
