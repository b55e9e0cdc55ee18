//! Axum route handlers for the Onboarding API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;
use crate::extract::AppJson;
use crate::gateway::{GatewayRequest, Message};
use crate::onboarding::steps::{Step, STEPS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub step: usize,
    /// Earlier step prompts and replies, in order.
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub step: usize,
    pub title: &'static str,
    pub content: String,
    pub progress_percent: f32,
    pub next_step: Option<usize>,
}

/// GET /api/v1/onboarding/steps
pub async fn handle_list_steps() -> Json<&'static [Step]> {
    Json(STEPS.as_slice())
}

/// POST /api/v1/onboarding
///
/// Runs one wizard step. The caller appends the step prompt and the returned
/// content to its history before requesting the next step.
pub async fn handle_onboarding_step(
    State(state): State<AppState>,
    AppJson(request): AppJson<OnboardingRequest>,
) -> Result<Json<OnboardingResponse>, GatewayError> {
    let step = Step::get(request.step)?;
    let messages = step.messages(&request.history)?;
    let response = state.gateway.complete(GatewayRequest::new(messages)?).await?;

    Ok(Json(OnboardingResponse {
        step: step.index,
        title: step.title,
        content: response.content,
        progress_percent: step.progress_percent(),
        next_step: step.next(),
    }))
}
