use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::errors::GatewayError;
use crate::gateway::retry::{backoff_delay, classify, FailureClass, MAX_ATTEMPTS};
use crate::gateway::{GatewayRequest, GatewayResponse};
use crate::llm_client::{ChatRequest, CompletionProvider, ProviderError, MODEL};

/// The completion gateway. Holds the process-wide provider handle and nothing
/// else, so one instance serves every concurrent request.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Fails with `Config` when no provider credential is set.
    pub fn ensure_configured(&self) -> Result<(), GatewayError> {
        if self.provider.has_credentials() {
            Ok(())
        } else {
            Err(GatewayError::Config)
        }
    }

    /// Sends the transcript and returns the chosen completion.
    ///
    /// Up to `MAX_ATTEMPTS` sequential attempts. Only rate-limit and transient
    /// failures are retried; everything else, including an empty completion,
    /// returns at once.
    pub async fn complete(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        self.ensure_configured()?;

        let request_id = Uuid::new_v4();
        debug!(%request_id, "Sending {} messages to {MODEL}", request.messages().len());
        let chat_request = ChatRequest::new(request.into_messages());
        let mut attempts_remaining = MAX_ATTEMPTS;

        loop {
            let attempt = MAX_ATTEMPTS - attempts_remaining + 1;

            let provider_error = match self.provider.chat(&chat_request).await {
                Ok(response) => {
                    if let Some(usage) = &response.usage {
                        debug!(
                            %request_id,
                            "Completion succeeded on attempt {attempt}: prompt_tokens={}, completion_tokens={}",
                            usage.prompt_tokens, usage.completion_tokens
                        );
                    }
                    return response
                        .first_message()
                        .and_then(GatewayResponse::from_completion)
                        .ok_or_else(|| {
                            error!(%request_id, "Provider returned no usable completion");
                            GatewayError::EmptyCompletion
                        });
                }
                Err(e) => e,
            };

            error!(%request_id, "Completion attempt {attempt}/{MAX_ATTEMPTS} failed: {provider_error}");

            let class = classify(&provider_error);
            if !class.is_retryable() {
                warn!(%request_id, "Not retrying {class:?} failure");
                return Err(into_gateway_error(class, provider_error));
            }

            attempts_remaining -= 1;
            if attempts_remaining == 0 {
                warn!(%request_id, "Giving up after {MAX_ATTEMPTS} attempts");
                return Err(into_gateway_error(class, provider_error));
            }

            let delay = backoff_delay(attempts_remaining);
            info!(
                %request_id,
                "Retrying {class:?} failure in {}ms ({attempts_remaining} attempts left)",
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}

fn into_gateway_error(class: FailureClass, e: ProviderError) -> GatewayError {
    match class {
        FailureClass::ModelUnavailable => GatewayError::ModelUnavailable,
        FailureClass::Auth => GatewayError::Auth,
        FailureClass::RateLimited => GatewayError::RateLimited { message: e.message },
        FailureClass::Transient => GatewayError::TransientService {
            status: e.status,
            message: e.message,
        },
        FailureClass::Unclassified => GatewayError::Unclassified(e.message),
    }
}
