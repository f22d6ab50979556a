//! Token positions
//!
//! One `TokenPosition` per account and symbol, holding a yes balance and a
//! no balance. Positions are created lazily on first mint or fill.

use crate::account::Balance;
use crate::numeric::Quantity;
use crate::order::TokenSide;
use serde::{Deserialize, Serialize};

/// Holdings of both outcome tokens of one symbol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPosition {
    pub yes: Balance,
    pub no: Balance,
}

impl TokenPosition {
    pub fn side(&self, side: TokenSide) -> &Balance {
        match side {
            TokenSide::Yes => &self.yes,
            TokenSide::No => &self.no,
        }
    }

    pub fn side_mut(&mut self, side: TokenSide) -> &mut Balance {
        match side {
            TokenSide::Yes => &mut self.yes,
            TokenSide::No => &mut self.no,
        }
    }

    /// Available plus locked tokens of `side`
    pub fn supply(&self, side: TokenSide) -> Quantity {
        self.side(side).total()
    }
}
