//! Trade execution logic
//!
//! Applies planned fills to the book and settles both counter-parties on
//! the ledger. Everything here runs after validation, so a ledger failure
//! means an invariant is broken and the process aborts.

use tracing::debug;
use types::errors::EngineError;
use types::ids::{AccountId, Symbol};
use types::numeric::Price;
use types::order::{OrderOrigin, TokenSide};
use types::trade::Fill;

use super::sweep::PlannedFill;
use crate::book::PriceLadder;
use crate::ledger::Ledger;

/// The buy being executed
#[derive(Debug, Clone, Copy)]
pub struct Taker<'a> {
    pub account_id: &'a AccountId,
    pub symbol: &'a Symbol,
    /// Ladder being swept; the token the taker receives
    pub side: TokenSide,
    /// Price the taker's currency was locked at
    pub limit: Price,
}

/// Match executor for handling fill generation
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Consume the planned order from the ladder and settle the fill
    ///
    /// Maker settlement depends on the resting order's origin:
    /// - `Sell`: the maker is paid `quantity × price` and their locked
    ///   tokens on the swept side are spent.
    /// - `Buy`: the maker's locked currency for the remainder,
    ///   `quantity × (1000 - price)`, is spent and they receive the
    ///   opposite token.
    ///
    /// The taker receives the swept token, pays `quantity × price` out of
    /// locked currency, and gets `quantity × (limit - price)` unlocked.
    pub fn execute(
        &mut self,
        ledger: &mut Ledger,
        ladder: &mut PriceLadder,
        taker: &Taker<'_>,
        planned: &PlannedFill,
    ) -> Fill {
        let consumed = ladder
            .reduce_oldest(planned.price, planned.quantity)
            .unwrap_or_else(|| panic!("planned fill found empty level at {}", planned.price));
        assert_eq!(
            consumed.order_id, planned.order_id,
            "price level changed between planning and execution"
        );

        let price = planned.price;
        let quantity = consumed.quantity;
        let maker = &consumed.account_id;

        match consumed.origin {
            OrderOrigin::Sell => {
                committed(ledger.credit_currency(maker, quantity * price.value()));
                committed(ledger.spend_locked_tokens(maker, taker.symbol, taker.side, quantity));
            }
            OrderOrigin::Buy => {
                committed(ledger.spend_locked_currency(maker, quantity * price.complement().value()));
                committed(ledger.credit_tokens(maker, taker.symbol, taker.side.opposite(), quantity));
            }
        }

        committed(ledger.credit_tokens(taker.account_id, taker.symbol, taker.side, quantity));
        committed(ledger.spend_locked_currency(taker.account_id, quantity * price.value()));
        let refund = quantity * (taker.limit.value() - price.value());
        if refund > 0 {
            committed(ledger.unlock_currency(taker.account_id, refund));
        }

        let sequence = self.next_sequence();
        debug!(
            sequence,
            symbol = %taker.symbol,
            side = %taker.side,
            price = %price,
            quantity,
            maker = %maker,
            taker = %taker.account_id,
            origin = ?consumed.origin,
            "fill executed"
        );

        Fill {
            sequence,
            symbol: taker.symbol.clone(),
            side: taker.side,
            price,
            quantity,
            maker_order_id: consumed.order_id,
            maker_account_id: consumed.account_id,
            maker_origin: consumed.origin,
            taker_account_id: taker.account_id.clone(),
            maker_exhausted: consumed.exhausted,
        }
    }
}

/// Unwrap a commit-phase ledger operation
///
/// # Panics
/// Panics if the operation failed: validation already guaranteed it could
/// not, so the ledger and book disagree.
pub(crate) fn committed<T>(result: Result<T, EngineError>) -> T {
    result.unwrap_or_else(|err| panic!("ledger invariant violated during commit: {err}"))
}
