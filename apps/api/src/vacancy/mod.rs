// Vacancy generation: form -> prompt -> gateway -> four-section parse.
// All LLM calls go through gateway::CompletionGateway.

pub mod form;
pub mod handlers;
pub mod parser;
pub mod prompts;
