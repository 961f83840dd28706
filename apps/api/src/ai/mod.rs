//! Generic model proxy: text, multimodal, and schema-constrained generation.

pub mod handlers;
