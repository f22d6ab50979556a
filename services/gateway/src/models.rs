use matching_engine::{BuyOutcome, MintOutcome, SellOutcome};
use serde::{Deserialize, Serialize};
use types::ids::{AccountId, Symbol};
use types::numeric::{Amount, Quantity};
use types::order::TokenSide;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnrampRequest {
    pub user_id: AccountId,
    pub amount: Amount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub user_id: AccountId,
    pub stock_symbol: Symbol,
    pub quantity: Quantity,
    /// Collateral charged per minted pair
    pub price: Amount,
}

/// Body shared by `/order/sell` and `/order/buy`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: AccountId,
    pub stock_symbol: Symbol,
    pub quantity: Quantity,
    pub price: u64,
    pub stock_type: TokenSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MintResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: MintOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: SellOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuyResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: BuyOutcome,
}
