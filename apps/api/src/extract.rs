use axum::extract::FromRequest;

use crate::errors::GatewayError;

/// `Json<T>` whose rejections are `GatewayError`s, so a bad body still
/// answers with `{ "error": "..." }`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct AppJson<T>(pub T);
