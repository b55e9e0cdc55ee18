// Onboarding wizard: four fixed steps, each one gateway call.

pub mod handlers;
pub mod steps;
