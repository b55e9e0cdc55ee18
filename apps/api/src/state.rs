use crate::gateway::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the single provider client built at startup.
    pub gateway: CompletionGateway,
}
