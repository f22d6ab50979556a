use crate::models::MessageResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Drop every account, position and order book
pub async fn reset(State(state): State<AppState>) -> Json<MessageResponse> {
    state.engine.write().await.reset();
    Json(MessageResponse::new("Objects reset done"))
}
