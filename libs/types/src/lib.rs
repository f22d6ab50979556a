//! Types library for the binary-outcome prediction market
//!
//! Every symbol trades two complementary tokens, "yes" and "no", whose
//! prices always sum to [`numeric::PRICE_TOTAL`]. This crate holds the
//! vocabulary shared by the matching engine and the gateway.
//!
//! # Modules
//! - `ids`: Identifiers (AccountId, Symbol, OrderId)
//! - `numeric`: Discrete price levels and integer quantities
//! - `order`: Token sides, resting orders and their origin tag
//! - `trade`: Fill records produced by a sweep
//! - `account`: Currency balance entries
//! - `position`: Per-symbol token positions
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod account;
pub mod position;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::account::*;
    pub use crate::position::*;
    pub use crate::errors::*;
}
