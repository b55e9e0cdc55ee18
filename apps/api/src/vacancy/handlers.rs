//! Axum route handler for the Vacancy API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::GatewayError;
use crate::extract::AppJson;
use crate::gateway::GatewayRequest;
use crate::state::AppState;
use crate::vacancy::form::VacancyForm;
use crate::vacancy::parser::{parse_vacancy_reply, strip_bullet, VacancyRecord};

/// Bullet lists with the leading `-` removed, ready to show as list items.
#[derive(Debug, Serialize)]
pub struct VacancyDisplay {
    pub skills: Vec<String>,
    pub questions: Vec<String>,
}

impl From<&VacancyRecord> for VacancyDisplay {
    fn from(record: &VacancyRecord) -> Self {
        let strip = |lines: &[String]| -> Vec<String> {
            lines.iter().map(|l| strip_bullet(l).to_string()).collect()
        };
        Self {
            skills: strip(&record.skills),
            questions: strip(&record.questions),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VacancyResponse {
    pub vacancy: VacancyRecord,
    pub display: VacancyDisplay,
    pub raw_reply: String,
}

/// POST /api/v1/vacancy
///
/// Generates a vacancy text from the form and splits it into description,
/// skills, salary and interview questions. Missing sections come back empty.
pub async fn handle_generate_vacancy(
    State(state): State<AppState>,
    AppJson(form): AppJson<VacancyForm>,
) -> Result<Json<VacancyResponse>, GatewayError> {
    form.validate()?;

    let request = GatewayRequest::new(form.to_messages())?;
    let reply = state.gateway.complete(request).await?;

    let vacancy = parse_vacancy_reply(&reply.content);
    let display = VacancyDisplay::from(&vacancy);

    Ok(Json(VacancyResponse {
        vacancy,
        display,
        raw_reply: reply.content,
    }))
}
