//! Competency-based interview question generation.

pub mod handlers;
pub mod prompts;
