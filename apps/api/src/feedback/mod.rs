//! Personalized candidate feedback drafting.

pub mod handlers;
pub mod prompts;
