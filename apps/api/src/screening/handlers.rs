//! Axum route handler for the Screening API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::GatewayError;
use crate::extract::AppJson;
use crate::gateway::GatewayRequest;
use crate::screening::form::{is_recommended, ScreeningForm};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub response: String,
    pub recommended: bool,
}

/// POST /api/v1/screening
///
/// Evaluates a candidate questionnaire and returns the model's assessment
/// with the verdict pulled out as a flag.
pub async fn handle_screen_candidate(
    State(state): State<AppState>,
    AppJson(form): AppJson<ScreeningForm>,
) -> Result<Json<ScreeningResponse>, GatewayError> {
    form.validate()?;

    let request = GatewayRequest::new(form.to_messages())?;
    let reply = state.gateway.complete(request).await?;
    let recommended = is_recommended(&reply.content);

    Ok(Json(ScreeningResponse {
        response: reply.content,
        recommended,
    }))
}
