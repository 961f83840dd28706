//! Unbiased profile generator: PII-stripped candidate summary plus fit analysis.

pub mod handlers;
pub mod prompts;
