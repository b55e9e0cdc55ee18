//! Failure classification and backoff for the gateway's retry loop.
//!
//! `classify` is the only code that reads provider status codes or error text.
//! Swap its internals for structured error codes without touching call sites.

use std::time::Duration;

use crate::llm_client::ProviderError;

/// Total attempts per `complete` call, including the first.
pub const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_UNIT_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// 404: model missing or not available to this key. Never retried.
    ModelUnavailable,
    /// 401 or "API key" in the message. Never retried.
    Auth,
    /// 429 or "rate limits". Retried.
    RateLimited,
    /// 500/502/503, timeout, network. Retried.
    Transient,
    Unclassified,
}

impl FailureClass {
    pub fn is_retryable(self) -> bool {
        matches!(self, FailureClass::RateLimited | FailureClass::Transient)
    }
}

pub fn classify(error: &ProviderError) -> FailureClass {
    if error.status == Some(404) {
        return FailureClass::ModelUnavailable;
    }
    if error.status == Some(401) || error.message.contains("API key") {
        return FailureClass::Auth;
    }

    let message = error.message.to_lowercase();

    if error.status == Some(429) || message.contains("rate limits") {
        return FailureClass::RateLimited;
    }
    if matches!(error.status, Some(500 | 502 | 503))
        || message.contains("timeout")
        || message.contains("network")
    {
        return FailureClass::Transient;
    }
    FailureClass::Unclassified
}

/// Wait before the next attempt, given how many attempts are still left.
///
/// Shrinks as attempts are consumed: with 3 attempts the waits are 4s then 2s.
pub fn backoff_delay(attempts_remaining: u32) -> Duration {
    Duration::from_millis(u64::from(attempts_remaining) * BACKOFF_UNIT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(status: Option<u16>, message: &str) -> ProviderError {
        ProviderError::new(status, message)
    }

    #[test]
    fn test_404_is_model_unavailable_even_with_retryable_text() {
        assert_eq!(
            classify(&err(Some(404), "network timeout")),
            FailureClass::ModelUnavailable
        );
    }

    #[test]
    fn test_api_key_text_is_auth() {
        assert_eq!(
            classify(&err(None, "Incorrect API key provided")),
            FailureClass::Auth
        );
        assert_eq!(classify(&err(Some(401), "Unauthorized")), FailureClass::Auth);
    }

    #[test]
    fn test_rate_limit_signals() {
        assert_eq!(classify(&err(Some(429), "slow down")), FailureClass::RateLimited);
        assert_eq!(
            classify(&err(None, "You exceeded your current Rate Limits")),
            FailureClass::RateLimited
        );
    }

    #[test]
    fn test_server_errors_are_transient() {
        for status in [500, 502, 503] {
            assert_eq!(
                classify(&err(Some(status), "upstream")),
                FailureClass::Transient
            );
        }
        assert_eq!(
            classify(&err(Some(504), "Gateway Timeout")),
            FailureClass::Transient
        );
    }

    #[test]
    fn test_transport_text_is_transient_case_insensitive() {
        assert_eq!(
            classify(&err(None, "Request TIMEOUT after 30s")),
            FailureClass::Transient
        );
        assert_eq!(
            classify(&err(None, "Network error: connection refused")),
            FailureClass::Transient
        );
    }

    #[test]
    fn test_other_failures_are_unclassified() {
        let class = classify(&err(Some(400), "Invalid 'messages[0].content'"));
        assert_eq!(class, FailureClass::Unclassified);
        assert!(!class.is_retryable());
    }

    #[test]
    fn test_backoff_shrinks_as_attempts_are_consumed() {
        assert_eq!(backoff_delay(2), Duration::from_millis(4000));
        assert_eq!(backoff_delay(1), Duration::from_millis(2000));
        assert!(backoff_delay(MAX_ATTEMPTS - 1) > backoff_delay(MAX_ATTEMPTS - 2));
    }
}
