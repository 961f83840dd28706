//! Job-description bias audit: structured critique with neutral rewrites.

pub mod handlers;
pub mod models;
pub mod prompts;
