pub mod account;
pub mod admin;
pub mod market;
pub mod order;

use crate::error::AppError;
use axum::extract::FromRequest;

/// JSON body extractor that reports malformed input as an `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
