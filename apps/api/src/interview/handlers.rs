//! Axum route handler for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;
use crate::extract::AppJson;
use crate::gateway::{GatewayRequest, Message};
use crate::interview::script::next_turn_messages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub reply: Message,
}

/// POST /api/v1/interview
///
/// Returns the interviewer's next turn. The caller appends it to its own
/// transcript and sends the whole history back with the next answer.
pub async fn handle_interview_turn(
    State(state): State<AppState>,
    AppJson(request): AppJson<InterviewRequest>,
) -> Result<Json<InterviewResponse>, GatewayError> {
    let messages = next_turn_messages(&request.history)?;
    let response = state.gateway.complete(GatewayRequest::new(messages)?).await?;

    Ok(Json(InterviewResponse {
        reply: Message::assistant(response.content),
    }))
}
