pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gateway::handlers as gateway;
use crate::interview::handlers as interview;
use crate::onboarding::handlers as onboarding;
use crate::screening::handlers as screening;
use crate::state::AppState;
use crate::vacancy::handlers as vacancy;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Raw completion proxy used by the pages
        .route("/api/openai", post(gateway::handle_completion))
        // Flow endpoints
        .route("/api/v1/vacancy", post(vacancy::handle_generate_vacancy))
        .route("/api/v1/screening", post(screening::handle_screen_candidate))
        .route("/api/v1/interview", post(interview::handle_interview_turn))
        .route("/api/v1/onboarding", post(onboarding::handle_onboarding_step))
        .route(
            "/api/v1/onboarding/steps",
            get(onboarding::handle_list_steps),
        )
        .with_state(state)
}
