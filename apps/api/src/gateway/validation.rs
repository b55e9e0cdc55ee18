//! Inbound payload checks for the proxy route.
//!
//! Works on a loose `serde_json::Value` rather than a derived struct so each
//! kind of bad input maps to its own error instead of one generic rejection.

use serde_json::Value;

use crate::errors::GatewayError;
use crate::gateway::{GatewayRequest, Message, Role};

/// Parses `{ "messages": [{ "role", "content" }, ...] }`.
///
/// Checks, in order: well-formed JSON, `messages` present as a non-empty
/// array, every element a `{ role, content }` object with a known role and
/// non-blank string content.
pub fn parse_payload(body: &[u8]) -> Result<GatewayRequest, GatewayError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|_| GatewayError::MalformedRequest)?;

    let raw_messages = payload
        .get("messages")
        .and_then(Value::as_array)
        .filter(|messages| !messages.is_empty())
        .ok_or(GatewayError::MissingMessages)?;

    let messages = raw_messages
        .iter()
        .map(parse_message)
        .collect::<Option<Vec<_>>>()
        .ok_or(GatewayError::InvalidMessageShape)?;

    GatewayRequest::new(messages)
}

fn parse_message(value: &Value) -> Option<Message> {
    let object = value.as_object()?;
    let role = object.get("role")?.as_str().and_then(Role::parse)?;
    let content = object.get("content")?.as_str()?;
    if content.trim().is_empty() {
        return None;
    }
    Some(Message::new(role, content))
}
