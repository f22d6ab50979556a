use super::ApiJson;
use crate::error::AppError;
use crate::models::{BuyResponse, MintRequest, MintResponse, OrderRequest, SellResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn mint(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MintRequest>,
) -> Result<(StatusCode, Json<MintResponse>), AppError> {
    let outcome = state.engine.write().await.mint(
        &payload.user_id,
        &payload.stock_symbol,
        payload.quantity,
        payload.price,
    )?;

    let message = format!(
        "Minted {} 'yes' and 'no' tokens for user {}, remaining balance is {}",
        outcome.quantity, outcome.account_id, outcome.balance.available
    );
    Ok((StatusCode::CREATED, Json(MintResponse { message, outcome })))
}

pub async fn place_sell(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OrderRequest>,
) -> Result<Json<SellResponse>, AppError> {
    let outcome = state.engine.write().await.place_sell(
        &payload.user_id,
        &payload.stock_symbol,
        payload.stock_type,
        payload.quantity,
        payload.price,
    )?;

    let message = format!("Sell order placed for {} '{}'", outcome.quantity, outcome.side);
    Ok(Json(SellResponse { message, outcome }))
}

pub async fn place_buy(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OrderRequest>,
) -> Result<Json<BuyResponse>, AppError> {
    let side = payload.stock_type;
    let outcome = state.engine.write().await.place_buy(
        &payload.user_id,
        &payload.stock_symbol,
        side,
        payload.quantity,
        payload.price,
    )?;

    let message = format!(
        "Buy order processed. {} {} tokens bought. {} {} tokens listed for sale.",
        outcome.executed_quantity,
        side,
        outcome.resting_quantity,
        side.opposite()
    );
    Ok(Json(BuyResponse { message, outcome }))
}
