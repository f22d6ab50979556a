//! Currency and token ledger
//!
//! Passive store of per-account currency balances and per-account,
//! per-symbol token positions. Every operation checks its business
//! precondition first and leaves the ledger untouched when it fails.

use std::collections::{BTreeMap, HashMap};
use types::account::Balance;
use types::errors::EngineError;
use types::ids::{AccountId, Symbol};
use types::numeric::{Amount, Quantity};
use types::order::TokenSide;
use types::position::TokenPosition;

/// Invariant: no balance, position or supply total exceeds `deposited`.
/// Currency only moves between accounts or into collateral, and every
/// token pair in existence cost at least one unit of currency, so keeping
/// `deposited` within `u64` keeps every credit and sum within `u64`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: HashMap<AccountId, Balance>,
    positions: HashMap<AccountId, BTreeMap<Symbol, TokenPosition>>,
    /// Currency ever brought in from outside
    deposited: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision an account with an empty balance
    pub fn create_account(&mut self, account: AccountId) -> Result<(), EngineError> {
        if self.balances.contains_key(&account) {
            return Err(EngineError::AccountExists {
                account_id: account.to_string(),
            });
        }
        self.balances.insert(account, Balance::default());
        Ok(())
    }

    pub fn contains(&self, account: &AccountId) -> bool {
        self.balances.contains_key(account)
    }

    pub fn balance(&self, account: &AccountId) -> Result<&Balance, EngineError> {
        self.balances
            .get(account)
            .ok_or_else(|| unknown_account(account))
    }

    /// Token position of `account` in `symbol`, if one was ever created
    pub fn position(&self, account: &AccountId, symbol: &Symbol) -> Option<&TokenPosition> {
        self.positions.get(account)?.get(symbol)
    }

    /// Available tokens of one side, zero when no position exists
    pub fn available_tokens(&self, account: &AccountId, symbol: &Symbol, side: TokenSide) -> Quantity {
        self.position(account, symbol)
            .map(|position| position.side(side).available)
            .unwrap_or(0)
    }

    // ----- currency -----

    /// Bring outside currency into `account`
    ///
    /// Rejected when the ledger-wide deposit total would overflow.
    pub fn deposit(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        let deposited = self.deposited.checked_add(amount).ok_or_else(|| {
            EngineError::InvalidInput(format!(
                "deposit of {amount} exceeds the currency supply bound (already deposited {})",
                self.deposited
            ))
        })?;
        self.balance_mut(account)?.credit(amount);
        self.deposited = deposited;
        Ok(())
    }

    /// Total currency deposited since the last clear
    pub fn deposited(&self) -> Amount {
        self.deposited
    }

    pub fn credit_currency(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        self.balance_mut(account)?.credit(amount);
        Ok(())
    }

    pub fn debit_currency(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        let balance = self.balance_mut(account)?;
        ensure_funds(balance.available, amount)?;
        balance.debit(amount);
        Ok(())
    }

    /// Move `amount` from available to locked
    pub fn lock_currency(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        let balance = self.balance_mut(account)?;
        ensure_funds(balance.available, amount)?;
        balance.lock(amount);
        Ok(())
    }

    /// Move `amount` from locked back to available
    pub fn unlock_currency(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        let balance = self.balance_mut(account)?;
        ensure_funds(balance.locked, amount)?;
        balance.unlock(amount);
        Ok(())
    }

    /// Remove `amount` of locked currency that left the account
    pub fn spend_locked_currency(&mut self, account: &AccountId, amount: Amount) -> Result<(), EngineError> {
        let balance = self.balance_mut(account)?;
        ensure_funds(balance.locked, amount)?;
        balance.spend_locked(amount);
        Ok(())
    }

    // ----- tokens -----

    /// Credit available tokens, creating the position on first use
    pub fn credit_tokens(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
    ) -> Result<(), EngineError> {
        if !self.contains(account) {
            return Err(unknown_account(account));
        }
        self.positions
            .entry(account.clone())
            .or_default()
            .entry(symbol.clone())
            .or_default()
            .side_mut(side)
            .credit(quantity);
        Ok(())
    }

    pub fn debit_tokens(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
    ) -> Result<(), EngineError> {
        let tokens = self.tokens_mut(account, symbol, side, quantity)?;
        ensure_tokens(symbol, side, tokens.available, quantity)?;
        tokens.debit(quantity);
        Ok(())
    }

    pub fn lock_tokens(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
    ) -> Result<(), EngineError> {
        let tokens = self.tokens_mut(account, symbol, side, quantity)?;
        ensure_tokens(symbol, side, tokens.available, quantity)?;
        tokens.lock(quantity);
        Ok(())
    }

    pub fn unlock_tokens(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
    ) -> Result<(), EngineError> {
        let tokens = self.tokens_mut(account, symbol, side, quantity)?;
        ensure_tokens(symbol, side, tokens.locked, quantity)?;
        tokens.unlock(quantity);
        Ok(())
    }

    /// Remove locked tokens that were sold
    pub fn spend_locked_tokens(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        quantity: Quantity,
    ) -> Result<(), EngineError> {
        let tokens = self.tokens_mut(account, symbol, side, quantity)?;
        ensure_tokens(symbol, side, tokens.locked, quantity)?;
        tokens.spend_locked(quantity);
        Ok(())
    }

    // ----- reporting -----

    /// All currency balances, ordered by account id
    pub fn balances(&self) -> BTreeMap<AccountId, Balance> {
        self.balances
            .iter()
            .map(|(account, balance)| (account.clone(), *balance))
            .collect()
    }

    /// All token positions of `account`
    pub fn positions_of(&self, account: &AccountId) -> BTreeMap<Symbol, TokenPosition> {
        self.positions.get(account).cloned().unwrap_or_default()
    }

    /// Every account holding at least one position
    pub fn position_holders(&self) -> impl Iterator<Item = &AccountId> {
        self.positions.keys()
    }

    /// Sum of available plus locked tokens of `side` across all accounts
    pub fn token_supply(&self, symbol: &Symbol, side: TokenSide) -> Quantity {
        self.positions
            .values()
            .filter_map(|by_symbol| by_symbol.get(symbol))
            .map(|position| position.supply(side))
            .sum()
    }

    /// Sum of available plus locked currency across all accounts
    pub fn currency_supply(&self) -> Amount {
        self.balances.values().map(Balance::total).sum()
    }

    /// Remove every account and position
    pub fn clear(&mut self) {
        self.balances.clear();
        self.positions.clear();
        self.deposited = 0;
    }

    fn balance_mut(&mut self, account: &AccountId) -> Result<&mut Balance, EngineError> {
        self.balances
            .get_mut(account)
            .ok_or_else(|| unknown_account(account))
    }

    /// Existing position side; a missing position holds zero tokens
    fn tokens_mut(
        &mut self,
        account: &AccountId,
        symbol: &Symbol,
        side: TokenSide,
        required: Quantity,
    ) -> Result<&mut Balance, EngineError> {
        if !self.contains(account) {
            return Err(unknown_account(account));
        }
        self.positions
            .get_mut(account)
            .and_then(|by_symbol| by_symbol.get_mut(symbol))
            .map(|position| position.side_mut(side))
            .ok_or_else(|| EngineError::InsufficientPosition {
                symbol: symbol.to_string(),
                side,
                required,
                available: 0,
            })
    }
}

fn unknown_account(account: &AccountId) -> EngineError {
    EngineError::UnknownAccount {
        account_id: account.to_string(),
    }
}

fn ensure_funds(available: Amount, required: Amount) -> Result<(), EngineError> {
    if available < required {
        return Err(EngineError::InsufficientFunds { required, available });
    }
    Ok(())
}

fn ensure_tokens(
    symbol: &Symbol,
    side: TokenSide,
    available: Quantity,
    required: Quantity,
) -> Result<(), EngineError> {
    if available < required {
        return Err(EngineError::InsufficientPosition {
            symbol: symbol.to_string(),
            side,
            required,
            available,
        });
    }
    Ok(())
}
