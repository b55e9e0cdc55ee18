//! Axum route handler for the raw completion proxy.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::GatewayError;
use crate::gateway::validation::parse_payload;
use crate::gateway::GatewayResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProxyResponse {
    pub response: GatewayResponse,
}

/// POST /api/openai
///
/// Body: `{ "messages": [{ "role", "content" }, ...] }`. Takes raw bytes so a
/// malformed body is reported as such rather than as an extractor rejection.
pub async fn handle_completion(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProxyResponse>, GatewayError> {
    state.gateway.ensure_configured()?;
    let request = parse_payload(&body)?;
    let response = state.gateway.complete(request).await?;
    Ok(Json(ProxyResponse { response }))
}
