//! Structured-Reply Parser: recovers the four numbered sections of a vacancy
//! reply. Best effort: never fails, missing sections stay empty.

use serde::{Deserialize, Serialize};

/// One parsed vacancy reply. Empty fields mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub description: String,
    /// Raw bullet lines, leading `-` kept.
    pub skills: Vec<String>,
    pub salary: String,
    /// Raw bullet lines, leading `-` kept.
    pub questions: Vec<String>,
}

/// Splits `reply` into sections keyed by `1)`..`4)` header lines.
///
/// Lines before the first header are dropped. A header may carry content on
/// the same line. Sections 2 and 4 keep only bullet lines.
pub fn parse_vacancy_reply(reply: &str) -> VacancyRecord {
    let mut record = VacancyRecord::default();
    let mut current_section = 0u8;
    let mut section_lines: Vec<String> = Vec::new();

    for raw_line in reply.lines() {
        let line = raw_line.trim();

        if let Some((section, rest)) = section_header(line) {
            if current_section > 0 && !section_lines.is_empty() {
                finalize_section(&mut record, current_section, &section_lines);
            }
            current_section = section;
            section_lines.clear();
            if !rest.is_empty() {
                section_lines.push(rest.to_string());
            }
        } else if current_section > 0 && !line.is_empty() {
            section_lines.push(line.to_string());
        }
    }

    if current_section > 0 && !section_lines.is_empty() {
        finalize_section(&mut record, current_section, &section_lines);
    }

    record
}

/// Matches `N)` with N in 1..=4, returning N and the trimmed rest of the line.
fn section_header(line: &str) -> Option<(u8, &str)> {
    let section = match line.chars().next()? {
        digit @ '1'..='4' => digit as u8 - b'0',
        _ => return None,
    };
    let rest = line[1..].strip_prefix(')')?;
    Some((section, rest.trim()))
}

/// `-` followed by whitespace or nothing.
pub fn is_bullet(line: &str) -> bool {
    match line.strip_prefix('-') {
        Some(rest) => rest.chars().next().map_or(true, char::is_whitespace),
        None => false,
    }
}

/// Render-time cleanup: drops the leading `-` and any whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    line.strip_prefix('-').map_or(line, str::trim_start)
}

fn finalize_section(record: &mut VacancyRecord, section: u8, lines: &[String]) {
    match section {
        1 => record.description = lines.join("\n").trim().to_string(),
        2 => record.skills = bullets(lines),
        3 => record.salary = lines.join("\n").trim().to_string(),
        4 => record.questions = bullets(lines),
        _ => {}
    }
}

fn bullets(lines: &[String]) -> Vec<String> {
    lines.iter().filter(|l| is_bullet(l)).cloned().collect()
}
