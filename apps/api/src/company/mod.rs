//! Company profile: the shared context every other tool draws on.

pub mod handlers;
pub mod models;
pub mod prompts;
