use crate::errors::GatewayError;
use crate::gateway::{Message, Role};
use crate::interview::prompts::{INTERVIEW_FOLLOW_UP_SYSTEM, INTERVIEW_OPENING_SYSTEM};

/// Builds the transcript for the next interviewer turn.
///
/// An empty history opens the interview. Otherwise the history must be a
/// user/assistant dialogue ending with the candidate's answer.
pub fn next_turn_messages(history: &[Message]) -> Result<Vec<Message>, GatewayError> {
    let Some(last) = history.last() else {
        return Ok(vec![Message::system(INTERVIEW_OPENING_SYSTEM)]);
    };

    if history.iter().any(|m| m.role == Role::System) {
        return Err(GatewayError::Validation(
            "history must not contain system messages".to_string(),
        ));
    }
    if last.role != Role::User {
        return Err(GatewayError::Validation(
            "history must end with the candidate's answer".to_string(),
        ));
    }

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(INTERVIEW_FOLLOW_UP_SYSTEM));
    messages.extend_from_slice(history);
    Ok(messages)
}
