use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;
use crate::gateway::Message;
use crate::vacancy::prompts::{VACANCY_PROMPT_TEMPLATE, VACANCY_SYSTEM};

const MIN_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionLevel {
    Junior,
    Middle,
    Senior,
    Lead,
}

impl PositionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionLevel::Junior => "Junior",
            PositionLevel::Middle => "Middle",
            PositionLevel::Senior => "Senior",
            PositionLevel::Lead => "Lead",
        }
    }
}

/// Input of the vacancy page. Everything except `desired_skills` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct VacancyForm {
    pub job_title: String,
    pub job_type: JobType,
    pub position_level: PositionLevel,
    pub short_description: String,
    pub location: String,
    pub salary_range: String,
    pub technical_skills: String,
    pub soft_skills: String,
    pub language_skills: String,
    #[serde(default)]
    pub desired_skills: String,
}

impl VacancyForm {
    pub fn validate(&self) -> Result<(), GatewayError> {
        let required = [
            ("job_title", &self.job_title),
            ("location", &self.location),
            ("salary_range", &self.salary_range),
            ("technical_skills", &self.technical_skills),
            ("soft_skills", &self.soft_skills),
            ("language_skills", &self.language_skills),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(GatewayError::Validation(format!("{field} cannot be empty")));
            }
        }

        if self.short_description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(GatewayError::Validation(format!(
                "short_description must be at least {MIN_DESCRIPTION_CHARS} characters"
            )));
        }

        Ok(())
    }

    /// System instruction followed by the filled-in form.
    pub fn to_messages(&self) -> Vec<Message> {
        let prompt = VACANCY_PROMPT_TEMPLATE
            .replace("{job_title}", self.job_title.trim())
            .replace("{job_type}", self.job_type.as_str())
            .replace("{position_level}", self.position_level.as_str())
            .replace("{short_description}", self.short_description.trim())
            .replace("{location}", self.location.trim())
            .replace("{salary_range}", self.salary_range.trim())
            .replace("{technical_skills}", self.technical_skills.trim())
            .replace("{soft_skills}", self.soft_skills.trim())
            .replace("{language_skills}", self.language_skills.trim())
            .replace("{desired_skills}", self.desired_skills.trim());

        vec![Message::system(VACANCY_SYSTEM), Message::user(prompt)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Role;

    fn sample_form() -> VacancyForm {
        serde_json::from_value(serde_json::json!({
            "job_title": "Backend-разработчик",
            "job_type": "Full-time",
            "position_level": "Senior",
            "short_description": "Разработка и поддержка платёжных сервисов, участие в проектировании архитектуры и код-ревью.",
            "location": "Москва / удалённо",
            "salary_range": "250 000 - 320 000 руб.",
            "technical_skills": "Rust, PostgreSQL, Kafka",
            "soft_skills": "Коммуникабельность",
            "language_skills": "Английский B2"
        }))
        .unwrap()
    }

    #[test]
    fn test_job_type_serde_names() {
        let job_type: JobType = serde_json::from_str(r#""Part-time""#).unwrap();
        assert_eq!(job_type, JobType::PartTime);
        assert!(serde_json::from_str::<JobType>(r#""Contract""#).is_err());
    }

    #[test]
    fn test_sample_form_is_valid_and_desired_skills_default_empty() {
        let form = sample_form();
        assert!(form.validate().is_ok());
        assert_eq!(form.desired_skills, "");
    }

    #[test]
    fn test_short_description_minimum_counts_chars_not_bytes() {
        let mut form = sample_form();
        // 30 Cyrillic chars = 60 bytes
        form.short_description = "я".repeat(30);
        assert!(matches!(form.validate(), Err(GatewayError::Validation(_))));
    }

    #[test]
    fn test_blank_required_field_is_named() {
        let mut form = sample_form();
        form.salary_range = "  ".to_string();
        match form.validate() {
            Err(GatewayError::Validation(msg)) => assert_eq!(msg, "salary_range cannot be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_messages_fill_every_placeholder() {
        let messages = sample_form().to_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("\"1)\", \"2)\", \"3)\", \"4)\""));

        let user = &messages[1].content;
        assert!(user.contains("Должность: Backend-разработчик"));
        assert!(user.contains("Тип работы: Full-time"));
        assert!(user.contains("- Технические: Rust, PostgreSQL, Kafka"));
        assert!(!user.contains('{'));
    }
}
