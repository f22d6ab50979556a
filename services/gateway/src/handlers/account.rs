use super::ApiJson;
use crate::error::AppError;
use crate::models::{MessageResponse, OnrampRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;
use types::account::Balance;
use types::ids::{AccountId, Symbol};
use types::position::TokenPosition;

pub async fn create_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let account = AccountId::try_new(user_id)?;
    state.engine.write().await.create_account(account.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("User {account} created"))),
    ))
}

pub async fn onramp(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OnrampRequest>,
) -> Result<Json<Balance>, AppError> {
    let balance = state
        .engine
        .write()
        .await
        .onramp(&payload.user_id, payload.amount)?;
    Ok(Json(balance))
}

pub async fn get_balances(State(state): State<AppState>) -> Json<BTreeMap<AccountId, Balance>> {
    Json(state.engine.read().await.snapshot_balances())
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Balance>, AppError> {
    let account = AccountId::try_new(user_id)?;
    let snapshot = state.engine.read().await.snapshot_ledger(&account)?;
    Ok(Json(snapshot.balance))
}

pub async fn get_positions(
    State(state): State<AppState>,
) -> Json<BTreeMap<AccountId, BTreeMap<Symbol, TokenPosition>>> {
    Json(state.engine.read().await.snapshot_positions())
}

pub async fn get_position(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BTreeMap<Symbol, TokenPosition>>, AppError> {
    let account = AccountId::try_new(user_id)?;
    let snapshot = state.engine.read().await.snapshot_ledger(&account)?;
    Ok(Json(snapshot.positions))
}
