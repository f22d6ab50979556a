//! Matching logic module
//!
//! Plans an ascending-price, FIFO sweep of one ladder and executes it.

pub mod sweep;
pub mod executor;

pub use sweep::{plan_sweep, PlannedFill, SweepPlan};
pub use executor::{MatchExecutor, Taker};
