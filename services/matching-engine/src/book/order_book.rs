//! Order book registry
//!
//! Maps each symbol to its pair of ladders. Uses BTreeMap so snapshots
//! list symbols in a deterministic order.

use std::collections::BTreeMap;
use types::errors::EngineError;
use types::ids::Symbol;
use types::order::TokenSide;

use super::price_ladder::PriceLadder;

/// Both ladders of one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBook {
    pub yes: PriceLadder,
    pub no: PriceLadder,
}

impl SymbolBook {
    pub fn ladder(&self, side: TokenSide) -> &PriceLadder {
        match side {
            TokenSide::Yes => &self.yes,
            TokenSide::No => &self.no,
        }
    }

    pub fn ladder_mut(&mut self, side: TokenSide) -> &mut PriceLadder {
        match side {
            TokenSide::Yes => &mut self.yes,
            TokenSide::No => &mut self.no,
        }
    }
}

/// All symbol books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    books: BTreeMap<Symbol, SymbolBook>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `symbol` has a book with both ladders
    ///
    /// Returns true if the book was created by this call; an existing book
    /// is left untouched.
    pub fn create_symbol(&mut self, symbol: Symbol) -> bool {
        if self.books.contains_key(&symbol) {
            return false;
        }
        self.books.insert(symbol, SymbolBook::default());
        true
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.books.contains_key(symbol)
    }

    pub fn get(&self, symbol: &Symbol) -> Result<&SymbolBook, EngineError> {
        self.books.get(symbol).ok_or_else(|| unknown_symbol(symbol))
    }

    pub fn get_mut(&mut self, symbol: &Symbol) -> Result<&mut SymbolBook, EngineError> {
        self.books.get_mut(symbol).ok_or_else(|| unknown_symbol(symbol))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.books.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &SymbolBook)> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Drop every symbol book
    pub fn clear(&mut self) {
        self.books.clear();
    }
}

fn unknown_symbol(symbol: &Symbol) -> EngineError {
    EngineError::UnknownSymbol {
        symbol: symbol.to_string(),
    }
}
