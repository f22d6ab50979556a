//! Error types for the matching engine
//!
//! Every variant is a recoverable business rejection reported before any
//! state changes. Broken internal invariants panic instead.

use crate::numeric::{Amount, Quantity, MAX_PRICE, MIN_PRICE, PRICE_STEP};
use crate::order::TokenSide;
use thiserror::Error;

/// Rejection reasons for engine and ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Invalid price {price}: must be a multiple of {step} between {min} and {max}",
        step = PRICE_STEP,
        min = MIN_PRICE,
        max = MAX_PRICE
    )]
    InvalidPrice { price: u64 },

    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("Unknown account: {account_id}")]
    UnknownAccount { account_id: String },

    #[error("Account already exists: {account_id}")]
    AccountExists { account_id: String },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    #[error("Insufficient {side} position in {symbol}: required {required}, available {available}")]
    InsufficientPosition {
        symbol: String,
        side: TokenSide,
        required: Quantity,
        available: Quantity,
    },
}

impl EngineError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput(_) => "INVALID_INPUT",
            EngineError::InvalidPrice { .. } => "INVALID_PRICE",
            EngineError::UnknownSymbol { .. } => "UNKNOWN_SYMBOL",
            EngineError::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            EngineError::AccountExists { .. } => "ACCOUNT_EXISTS",
            EngineError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            EngineError::InsufficientPosition { .. } => "INSUFFICIENT_POSITION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_price_display() {
        let err = EngineError::InvalidPrice { price: 975 };
        assert_eq!(
            err.to_string(),
            "Invalid price 975: must be a multiple of 50 between 50 and 950"
        );
    }

    #[test]
    fn test_insufficient_position_display() {
        let err = EngineError::InsufficientPosition {
            symbol: "ETH_UP".to_string(),
            side: TokenSide::No,
            required: 15,
            available: 10,
        };
        assert!(err.to_string().contains("no position in ETH_UP"));
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EngineError::InsufficientFunds { required: 2, available: 1 }.code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(EngineError::InvalidInput("x".into()).code(), "INVALID_INPUT");
    }
}
