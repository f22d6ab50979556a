//! Matching engine core
//!
//! Entry point for every mutating request. Each operation validates all of
//! its preconditions against the store first and only then commits; a
//! rejected request leaves the ledger and book exactly as they were.

use std::collections::BTreeMap;
use serde::Serialize;
use tracing::{debug, info, warn};
use types::account::Balance;
use types::errors::EngineError;
use types::ids::{AccountId, OrderId, Symbol};
use types::numeric::{checked_cost, Amount, Price, Quantity};
use types::order::{OrderOrigin, RestingOrder, TokenSide};
use types::position::TokenPosition;
use types::trade::Fill;

use crate::matching::executor::committed;
use crate::matching::{plan_sweep, MatchExecutor, Taker};
use crate::snapshot::{LedgerSnapshot, OrderBookSnapshot};
use crate::store::MarketStore;

const FIRST_SEQUENCE: u64 = 1;

/// Main matching engine
pub struct MatchingEngine {
    store: MarketStore,
    /// Fill executor with sequence generation
    executor: MatchExecutor,
}

/// Result of a mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintOutcome {
    pub account_id: AccountId,
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub cost: Amount,
    /// Currency balance after the mint
    pub balance: Balance,
    /// Token position after the mint
    pub position: TokenPosition,
}

/// Result of resting a sell order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellOutcome {
    pub order_id: OrderId,
    pub side: TokenSide,
    pub price: Price,
    pub quantity: Quantity,
    /// Zero-based position in the level's queue
    pub queue_position: usize,
}

/// Result of a buy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyOutcome {
    pub executed_quantity: Quantity,
    pub resting_quantity: Quantity,
    pub fills: Vec<Fill>,
    /// Remainder rested on the complementary side at the complementary price
    pub resting_order: Option<OrderId>,
}

impl MatchingEngine {
    /// Engine over an empty store
    pub fn new() -> Self {
        Self::with_store(MarketStore::new())
    }

    /// Engine over an existing store
    pub fn with_store(store: MarketStore) -> Self {
        Self {
            store,
            executor: MatchExecutor::new(FIRST_SEQUENCE),
        }
    }

    pub fn store(&self) -> &MarketStore {
        &self.store
    }

    /// Provision an account with a zero balance
    pub fn create_account(&mut self, account: AccountId) -> Result<(), EngineError> {
        self.store
            .ledger
            .create_account(account.clone())
            .map_err(|err| rejected("create_account", err))?;
        info!(account = %account, "account created");
        Ok(())
    }

    /// Credit deposited currency to an account
    pub fn onramp(&mut self, account: &AccountId, amount: Amount) -> Result<Balance, EngineError> {
        self.try_onramp(account, amount)
            .map_err(|err| rejected("onramp", err))
    }

    fn try_onramp(&mut self, account: &AccountId, amount: Amount) -> Result<Balance, EngineError> {
        ensure_positive(amount, "amount")?;
        self.store.ledger.deposit(account, amount)?;
        info!(account = %account, amount, "onramp credited");
        self.store.ledger.balance(account).copied()
    }

    /// Ensure `symbol` has an order book; returns true if it was created
    pub fn create_symbol(&mut self, symbol: Symbol) -> bool {
        let created = self.store.book.create_symbol(symbol.clone());
        if created {
            info!(symbol = %symbol, "symbol created");
        }
        created
    }

    /// Lock `quantity × price` of collateral and issue `quantity` yes and no
    /// tokens to the account
    pub fn mint(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        quantity: Quantity,
        price: Amount,
    ) -> Result<MintOutcome, EngineError> {
        self.try_mint(account, symbol, quantity, price)
            .map_err(|err| rejected("mint", err))
    }

    fn try_mint(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        quantity: Quantity,
        price: Amount,
    ) -> Result<MintOutcome, EngineError> {
        ensure_positive(quantity, "quantity")?;
        ensure_positive(price, "price")?;
        self.store.book.get(symbol)?;
        let balance = *self.store.ledger.balance(account)?;
        let cost = checked_cost(quantity, price)?;
        ensure_funds(&balance, cost)?;

        let ledger = &mut self.store.ledger;
        committed(ledger.debit_currency(account, cost));
        committed(ledger.credit_tokens(account, symbol, TokenSide::Yes, quantity));
        committed(ledger.credit_tokens(account, symbol, TokenSide::No, quantity));

        info!(account = %account, symbol = %symbol, quantity, cost, "tokens minted");
        Ok(MintOutcome {
            account_id: account.clone(),
            symbol: symbol.clone(),
            quantity,
            cost,
            balance: *ledger.balance(account)?,
            position: ledger.position(account, symbol).copied().unwrap_or_default(),
        })
    }

    /// Lock `quantity` tokens of `side` and rest them as a sell at `price`
    pub fn place_sell(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
        price: u64,
    ) -> Result<SellOutcome, EngineError> {
        self.try_place_sell(account, symbol, side, quantity, price)
            .map_err(|err| rejected("place_sell", err))
    }

    fn try_place_sell(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
        price: u64,
    ) -> Result<SellOutcome, EngineError> {
        ensure_positive(quantity, "quantity")?;
        let price = Price::new(price)?;
        self.store.book.get(symbol)?;
        self.store.ledger.balance(account)?;
        let available = self.store.ledger.available_tokens(account, symbol, side);
        if available < quantity {
            return Err(EngineError::InsufficientPosition {
                symbol: symbol.to_string(),
                side,
                required: quantity,
                available,
            });
        }

        committed(self.store.ledger.lock_tokens(account, symbol, side, quantity));
        let order = RestingOrder::new(account.clone(), quantity, OrderOrigin::Sell);
        let order_id = order.order_id;
        let queue_position = committed(self.store.book.get_mut(symbol))
            .ladder_mut(side)
            .enqueue(price, order);

        debug!(
            account = %account,
            symbol = %symbol,
            side = %side,
            price = %price,
            quantity,
            queue_position,
            "sell order rested"
        );
        Ok(SellOutcome {
            order_id,
            side,
            price,
            quantity,
            queue_position,
        })
    }

    /// Buy up to `quantity` of `side` at no more than `limit`
    ///
    /// Locks `quantity × limit`, sweeps the same-side ladder from the
    /// cheapest level up to `limit`, and rests any remainder as a buy-origin
    /// order on the opposite side at `1000 - limit`.
    pub fn place_buy(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
        limit: u64,
    ) -> Result<BuyOutcome, EngineError> {
        self.try_place_buy(account, symbol, side, quantity, limit)
            .map_err(|err| rejected("place_buy", err))
    }

    fn try_place_buy(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
        limit: u64,
    ) -> Result<BuyOutcome, EngineError> {
        ensure_positive(quantity, "quantity")?;
        let limit = Price::new(limit)?;
        let book = self.store.book.get(symbol)?;
        let balance = *self.store.ledger.balance(account)?;
        let total_cost = limit.cost(quantity)?;
        ensure_funds(&balance, total_cost)?;

        let plan = plan_sweep(book.ladder(side), limit, quantity);

        // Commit: nothing below can fail short of a broken invariant.
        let MarketStore { ledger, book } = &mut self.store;
        committed(ledger.lock_currency(account, total_cost));

        let symbol_book = committed(book.get_mut(symbol));
        let taker = Taker {
            account_id: account,
            symbol,
            side,
            limit,
        };
        let mut fills = Vec::with_capacity(plan.fills.len());
        for planned in &plan.fills {
            let ladder = symbol_book.ladder_mut(side);
            fills.push(self.executor.execute(ledger, ladder, &taker, planned));
        }

        let resting_order = if plan.remaining > 0 {
            let order = RestingOrder::new(account.clone(), plan.remaining, OrderOrigin::Buy);
            let order_id = order.order_id;
            symbol_book
                .ladder_mut(side.opposite())
                .enqueue(limit.complement(), order);
            debug!(
                account = %account,
                symbol = %symbol,
                side = %side.opposite(),
                price = %limit.complement(),
                quantity = plan.remaining,
                "buy remainder rested"
            );
            Some(order_id)
        } else {
            None
        };

        info!(
            account = %account,
            symbol = %symbol,
            side = %side,
            limit = %limit,
            executed = plan.executed,
            resting = plan.remaining,
            fills = fills.len(),
            "buy processed"
        );
        Ok(BuyOutcome {
            executed_quantity: plan.executed,
            resting_quantity: plan.remaining,
            fills,
            resting_order,
        })
    }

    /// Both ladders of `symbol`, all levels
    pub fn snapshot_order_book(&self, symbol: &Symbol) -> Result<OrderBookSnapshot, EngineError> {
        let book = self.store.book.get(symbol)?;
        Ok(OrderBookSnapshot::capture(symbol, book))
    }

    /// Every symbol's book
    pub fn snapshot_order_books(&self) -> Vec<OrderBookSnapshot> {
        self.store
            .book
            .iter()
            .map(|(symbol, book)| OrderBookSnapshot::capture(symbol, book))
            .collect()
    }

    /// Currency balance and positions of one account
    pub fn snapshot_ledger(&self, account: &AccountId) -> Result<LedgerSnapshot, EngineError> {
        let balance = *self.store.ledger.balance(account)?;
        Ok(LedgerSnapshot {
            account_id: account.clone(),
            balance,
            positions: self.store.ledger.positions_of(account),
        })
    }

    /// Currency balances of every account
    pub fn snapshot_balances(&self) -> BTreeMap<AccountId, Balance> {
        self.store.ledger.balances()
    }

    /// Token positions of every account that holds any
    pub fn snapshot_positions(&self) -> BTreeMap<AccountId, BTreeMap<Symbol, TokenPosition>> {
        self.store
            .ledger
            .position_holders()
            .map(|account| (account.clone(), self.store.ledger.positions_of(account)))
            .collect()
    }

    /// Clear all state and restart fill sequencing
    pub fn reset(&mut self) {
        self.store.reset();
        self.executor = MatchExecutor::new(FIRST_SEQUENCE);
        info!("engine state reset");
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive(value: u64, field: &str) -> Result<(), EngineError> {
    if value == 0 {
        return Err(EngineError::InvalidInput(format!("{field} must be positive")));
    }
    Ok(())
}

fn ensure_funds(balance: &Balance, required: Amount) -> Result<(), EngineError> {
    if balance.available < required {
        return Err(EngineError::InsufficientFunds {
            required,
            available: balance.available,
        });
    }
    Ok(())
}

fn rejected(operation: &'static str, err: EngineError) -> EngineError {
    warn!(operation, code = err.code(), error = %err, "request rejected");
    err
}
