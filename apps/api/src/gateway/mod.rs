//! Completion Gateway: validates a role-tagged transcript, forwards it to the
//! provider with bounded retry, and maps every failure to a `GatewayError`.
//!
//! Stateless: the caller owns the transcript and resends it in full each turn.

pub mod handlers;
pub mod retry;
pub mod service;
pub mod validation;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::GatewayError;
use crate::llm_client::CompletionMessage;

pub use service::CompletionGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One turn of the transcript. `content` is non-empty after trimming once it
/// has passed through `GatewayRequest::new` or `validation::parse_payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn is_well_formed(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// A validated, non-empty transcript. The only way into `CompletionGateway::complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    messages: Vec<Message>,
}

impl GatewayRequest {
    pub fn new(messages: Vec<Message>) -> Result<Self, GatewayError> {
        if messages.is_empty() {
            return Err(GatewayError::MissingMessages);
        }
        if !messages.iter().all(Message::is_well_formed) {
            return Err(GatewayError::InvalidMessageShape);
        }
        Ok(Self { messages })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// The chosen completion, echoed to the caller as `{ "response": { ... } }`.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayResponse {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GatewayResponse {
    /// Accepts the provider's message only if it has non-blank content.
    pub fn from_completion(message: CompletionMessage) -> Option<Self> {
        let content = message.content.filter(|c| !c.trim().is_empty())?;
        Some(Self {
            role: message.role,
            content,
            extra: message.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("User"), None);
        assert_eq!(Role::parse("tool"), None);
    }

    #[test]
    fn test_request_rejects_empty_transcript() {
        assert!(matches!(
            GatewayRequest::new(vec![]),
            Err(GatewayError::MissingMessages)
        ));
    }

    #[test]
    fn test_request_rejects_blank_content() {
        let result = GatewayRequest::new(vec![Message::system("ok"), Message::user("  \n ")]);
        assert!(matches!(result, Err(GatewayError::InvalidMessageShape)));
    }

    #[test]
    fn test_request_preserves_order() {
        let request = GatewayRequest::new(vec![
            Message::system("s"),
            Message::assistant("a"),
            Message::user("u"),
        ])
        .unwrap();
        let roles: Vec<Role> = request.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::Assistant, Role::User]);
    }

    #[test]
    fn test_response_rejects_blank_completion() {
        let message = CompletionMessage {
            role: "assistant".to_string(),
            content: Some("   ".to_string()),
            extra: Map::new(),
        };
        assert!(GatewayResponse::from_completion(message).is_none());
    }
}
