// Resume screening: candidate form -> evaluation prompt -> verdict.

pub mod form;
pub mod handlers;
pub mod prompts;
