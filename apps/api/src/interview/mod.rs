// Interview chat: scripted HR interviewer over a caller-owned transcript.

pub mod handlers;
pub mod prompts;
pub mod script;
