use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure the completion gateway and the flow endpoints can surface.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, GatewayError>`.
///
/// The response body is always `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("OpenAI API key is not configured")]
    Config,

    #[error("Invalid JSON in request body")]
    MalformedRequest,

    #[error("Messages array is required")]
    MissingMessages,

    #[error("Invalid message format")]
    InvalidMessageShape,

    #[error("Invalid OpenAI API key configuration")]
    Auth,

    #[error("Model not found or not available")]
    ModelUnavailable,

    #[error("Invalid response from OpenAI API")]
    EmptyCompletion,

    /// 429 / "rate limits" that survived every attempt.
    #[error("{message}")]
    RateLimited { message: String },

    /// 500/502/503, timeout or network failure that survived every attempt.
    #[error("{message}")]
    TransientService {
        status: Option<u16>,
        message: String,
    },

    /// Provider failure that fits no other class.
    #[error("{0}")]
    Unclassified(String),

    /// Incomplete form input on one of the flow endpoints.
    #[error("{0}")]
    Validation(String),
}

impl GatewayError {
    /// The status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            GatewayError::Config
            | GatewayError::MalformedRequest
            | GatewayError::MissingMessages
            | GatewayError::InvalidMessageShape
            | GatewayError::Auth
            | GatewayError::ModelUnavailable
            | GatewayError::EmptyCompletion => (self.fixed_status(), self.to_string()),
            GatewayError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::RateLimited { message }
            | GatewayError::TransientService { message, .. }
            | GatewayError::Unclassified(message) => fallback_response(message),
        }
    }

    fn fixed_status(&self) -> StatusCode {
        match self {
            GatewayError::Config => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Auth => StatusCode::UNAUTHORIZED,
            GatewayError::ModelUnavailable | GatewayError::EmptyCompletion => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Best-effort mapping for provider errors that escaped the retry loop.
///
/// Matching is case-sensitive. First match wins.
pub fn fallback_response(message: &str) -> (StatusCode, String) {
    if message.contains("API key") {
        (StatusCode::UNAUTHORIZED, "Invalid OpenAI API key".to_string())
    } else if message.contains("Rate limit") {
        (
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.".to_string(),
        )
    } else if message.contains("Invalid message format") {
        (
            StatusCode::BAD_REQUEST,
            "Invalid message format in request".to_string(),
        )
    } else if message.contains("model") {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Model error. Please try again.".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to process request. Please try again later.".to_string(),
        )
    }
}

/// Body rejections on the flow endpoints (bad JSON, wrong field types,
/// missing content type) are reported as plain validation failures.
impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::Validation(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if let GatewayError::TransientService {
            status: Some(upstream),
            ..
        } = &self
        {
            tracing::error!("Request failed with {status} (upstream {upstream}): {self}");
        } else if status.is_server_error() {
            tracing::error!("Request failed with {status}: {self}");
        } else {
            tracing::debug!("Request rejected with {status}: {self}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_variants_map_to_fixed_statuses() {
        let cases = [
            (GatewayError::Config, StatusCode::INTERNAL_SERVER_ERROR),
            (GatewayError::MalformedRequest, StatusCode::BAD_REQUEST),
            (GatewayError::MissingMessages, StatusCode::BAD_REQUEST),
            (GatewayError::InvalidMessageShape, StatusCode::BAD_REQUEST),
            (GatewayError::Auth, StatusCode::UNAUTHORIZED),
            (GatewayError::ModelUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (GatewayError::EmptyCompletion, StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status_and_message().0, expected, "{err:?}");
        }
    }

    #[test]
    fn test_exhausted_transient_error_is_generic_500() {
        let err = GatewayError::TransientService {
            status: Some(503),
            message: "Service Unavailable".to_string(),
        };
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Failed to process request. Please try again later.");
    }

    #[test]
    fn test_exhausted_rate_limit_with_provider_wording_is_429() {
        let err = GatewayError::RateLimited {
            message: "Rate limit reached for gpt-4o-mini on requests per min".to_string(),
        };
        assert_eq!(err.status_and_message().0, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_fallback_order_prefers_api_key_over_model() {
        let (status, _) = fallback_response("Incorrect API key provided for model access");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_fallback_model_text_is_503() {
        let (status, _) = fallback_response("The model `gpt-x` does not exist");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_fallback_message_format_is_400() {
        let (status, message) = fallback_response("Invalid message format at index 2");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Invalid message format in request");
    }

    #[test]
    fn test_validation_carries_its_message() {
        let err = GatewayError::Validation("job_title cannot be empty".to_string());
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "job_title cannot be empty");
    }
}
