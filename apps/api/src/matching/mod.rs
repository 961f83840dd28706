//! Candidate-to-job matching: the match endpoint and the debounced
//! internal-talent-marketplace loop over the pipeline store.

pub mod handlers;
pub mod marketplace;
pub mod matcher;
pub mod models;
pub mod prompts;
