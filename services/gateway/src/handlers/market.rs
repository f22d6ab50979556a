use crate::error::AppError;
use crate::models::MessageResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use matching_engine::OrderBookSnapshot;
use types::ids::Symbol;

/// Creating an existing symbol is a no-op and answers 200 instead of 201
pub async fn create_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let symbol = Symbol::try_new(symbol)?;
    if state.engine.write().await.create_symbol(symbol.clone()) {
        Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new(format!("Symbol {symbol} created"))),
        ))
    } else {
        Ok((
            StatusCode::OK,
            Json(MessageResponse::new(format!("Symbol {symbol} already exists"))),
        ))
    }
}

pub async fn get_order_books(State(state): State<AppState>) -> Json<Vec<OrderBookSnapshot>> {
    Json(state.engine.read().await.snapshot_order_books())
}

pub async fn get_order_book(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<OrderBookSnapshot>, AppError> {
    let symbol = Symbol::try_new(symbol)?;
    let snapshot = state.engine.read().await.snapshot_order_book(&symbol)?;
    Ok(Json(snapshot))
}
