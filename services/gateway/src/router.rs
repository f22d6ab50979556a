use crate::handlers::{account, admin, market, order};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/user/create/{user_id}", post(account::create_user))
        .route("/onramp/inr", post(account::onramp))
        .route("/symbol/create/{symbol}", post(market::create_symbol))
        .route("/trade/mint", post(order::mint))
        .route("/order/sell", post(order::place_sell))
        .route("/order/buy", post(order::place_buy))
        .route("/balances/inr", get(account::get_balances))
        .route("/balances/inr/{user_id}", get(account::get_balance))
        .route("/balances/stock", get(account::get_positions))
        .route("/balances/stock/{user_id}", get(account::get_position))
        .route("/orderbook", get(market::get_order_books))
        .route("/orderbook/{symbol}", get(market::get_order_book))
        .route("/reset", post(admin::reset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, uri, Some(body)).await
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    /// Router with users `alice` and `bob` funded and symbol `ETH_UP` listed
    async fn seeded() -> Router {
        let app = create_router(AppState::default());
        for user in ["alice", "bob"] {
            let (status, _) = send(&app, Method::POST, &format!("/user/create/{user}"), None).await;
            assert_eq!(status, StatusCode::CREATED);
            let (status, _) = post(&app, "/onramp/inr", json!({ "userId": user, "amount": 10_000 })).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, _) = send(&app, Method::POST, "/symbol/create/ETH_UP", None).await;
        assert_eq!(status, StatusCode::CREATED);
        app
    }

    #[tokio::test]
    async fn test_create_user_twice_conflicts() {
        let app = seeded().await;
        let (status, body) = send(&app, Method::POST, "/user/create/alice", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "ACCOUNT_EXISTS");
    }

    #[tokio::test]
    async fn test_create_symbol_is_idempotent() {
        let app = seeded().await;
        let (status, _) = send(&app, Method::POST, "/symbol/create/ETH_UP", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, books) = get(&app, "/orderbook").await;
        assert_eq!(books.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mint_sell_buy_flow() {
        let app = seeded().await;

        let (status, body) = post(
            &app,
            "/trade/mint",
            json!({ "userId": "alice", "stockSymbol": "ETH_UP", "quantity": 5, "price": 1000 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["cost"], 5000);

        let (status, body) = post(
            &app,
            "/order/sell",
            json!({ "userId": "alice", "stockSymbol": "ETH_UP", "quantity": 5, "price": 300, "stockType": "yes" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["queuePosition"], 0);

        let (status, body) = post(
            &app,
            "/order/buy",
            json!({ "userId": "bob", "stockSymbol": "ETH_UP", "quantity": 8, "price": 300, "stockType": "yes" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["executedQuantity"], 5);
        assert_eq!(body["restingQuantity"], 3);
        assert_eq!(body["fills"][0]["makerAccountId"], "alice");
        assert_eq!(body["fills"][0]["makerOrigin"], "sell");
        assert!(body["restingOrder"].is_string());

        let (_, balance) = get(&app, "/balances/inr/bob").await;
        assert_eq!(balance, json!({ "available": 7600, "locked": 900 }));

        let (_, positions) = get(&app, "/balances/stock/bob").await;
        assert_eq!(positions["ETH_UP"]["yes"]["available"], 5);

        let (_, book) = get(&app, "/orderbook/ETH_UP").await;
        assert_eq!(book["no"][13]["price"], 700);
        assert_eq!(book["no"][13]["total"], 3);
        assert_eq!(book["no"][13]["orders"][0]["accountId"], "bob");
        assert_eq!(book["bestNo"], 700);
        assert_eq!(book["bestYes"], Value::Null);
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let app = seeded().await;

        let (status, body) = get(&app, "/balances/inr/carol").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "UNKNOWN_ACCOUNT");

        let (status, _) = get(&app, "/orderbook/NOPE").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = post(
            &app,
            "/order/buy",
            json!({ "userId": "bob", "stockSymbol": "ETH_UP", "quantity": 1, "price": 325, "stockType": "no" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_PRICE");

        let (status, body) = post(&app, "/order/sell", json!({ "userId": "bob", "quantity": 1 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST");

        let (status, body) = post(
            &app,
            "/trade/mint",
            json!({ "userId": "bob", "stockSymbol": "ETH_UP", "quantity": 11, "price": 1000 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INSUFFICIENT_FUNDS");

        let (status, body) = post(&app, "/onramp/inr", json!({ "userId": "bob", "amount": u64::MAX })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_INPUT");
        let (_, balance) = get(&app, "/balances/inr/bob").await;
        assert_eq!(balance["available"], 10_000);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let app = seeded().await;
        let (status, body) = send(&app, Method::POST, "/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Objects reset done");

        let (_, balances) = get(&app, "/balances/inr").await;
        assert_eq!(balances, json!({}));
        let (_, positions) = get(&app, "/balances/stock").await;
        assert_eq!(positions, json!({}));
        let (_, books) = get(&app, "/orderbook").await;
        assert_eq!(books, json!([]));
    }
}
