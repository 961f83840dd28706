//! Candidate pipelines: named, ordered, user-arranged lists of entries.

pub mod handlers;
pub mod models;
pub mod store;
