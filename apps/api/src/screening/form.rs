use serde::Deserialize;

use crate::errors::GatewayError;
use crate::gateway::Message;
use crate::screening::prompts::{NOT_RECOMMENDED_MARKER, RECOMMENDED_MARKER, SCREENING_SYSTEM};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub university: String,
    pub specialization: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company_name: String,
    pub position: String,
    pub duties: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Languages {
    pub english: String,
    pub other: String,
}

/// Candidate questionnaire. Only name and email are enforced; the model is
/// told to weigh whatever else is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreeningForm {
    pub name: String,
    pub email: String,
    pub keywords: String,
    pub education: Education,
    pub work_experience: Vec<WorkExperience>,
    pub technical_skills: String,
    pub soft_skills: String,
    pub management_skills: String,
    pub languages: Languages,
    pub cover_letter: String,
    pub ready_to_travel: bool,
    pub has_driver_license: bool,
    pub remote_work: bool,
    pub expected_salary: String,
    pub additional_comments: Option<String>,
}

impl ScreeningForm {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.name.trim().chars().count() < 2 {
            return Err(GatewayError::Validation(
                "name must be at least 2 characters".to_string(),
            ));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(GatewayError::Validation("email is not valid".to_string()));
        }
        Ok(())
    }

    pub fn to_messages(&self) -> Vec<Message> {
        vec![Message::system(SCREENING_SYSTEM), Message::user(self.profile())]
    }

    /// The candidate profile as the user turn.
    fn profile(&self) -> String {
        let mut lines = vec![
            "Candidate Profile:".to_string(),
            format!("Name: {}", self.name.trim()),
            format!("Email: {}", self.email.trim()),
            format!("Keywords: {}", self.keywords),
            String::new(),
            "Education:".to_string(),
            format!("- University: {}", self.education.university),
            format!("- Specialization: {}", self.education.specialization),
            format!("- Graduation Year: {}", self.education.graduation_year),
            String::new(),
            "Work Experience:".to_string(),
        ];

        for (index, exp) in self.work_experience.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, exp.company_name));
            lines.push(format!("   Position: {}", exp.position));
            lines.push(format!("   Duration: {}", exp.duration));
            lines.push(format!("   Duties: {}", exp.duties));
        }

        let comments = self
            .additional_comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("None provided");

        lines.extend([
            String::new(),
            "Skills:".to_string(),
            format!("- Technical: {}", self.technical_skills),
            format!("- Soft Skills: {}", self.soft_skills),
            format!("- Management: {}", self.management_skills),
            String::new(),
            "Languages:".to_string(),
            format!("- English: {}", self.languages.english),
            format!("- Other Languages: {}", self.languages.other),
            String::new(),
            "Additional Information:".to_string(),
            format!("- Ready to Travel: {}", yes_no(self.ready_to_travel)),
            format!("- Has Driver's License: {}", yes_no(self.has_driver_license)),
            format!("- Open to Remote Work: {}", yes_no(self.remote_work)),
            format!("- Expected Salary: {}", self.expected_salary),
            String::new(),
            "Cover Letter:".to_string(),
            self.cover_letter.clone(),
            String::new(),
            "Additional Comments:".to_string(),
            comments.to_string(),
        ]);

        lines.join("\n")
    }
}

/// True when the reply recommends the candidate: it mentions the positive
/// verdict and nowhere the negative one.
pub fn is_recommended(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    reply.contains(RECOMMENDED_MARKER) && !reply.contains(NOT_RECOMMENDED_MARKER)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && tld.chars().count() >= 2)
        }
        None => false,
    }
}
