//! Candidate matcher — trait seam over the model call so the marketplace
//! loop and the match endpoint share one path and tests can stub the model.
//!
//! `AppState` holds an `Arc<dyn CandidateMatcher>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::GenAiClient;
use crate::matching::models::{candidate_match_schema, CandidateMatchResult, MatchCandidate};
use crate::matching::prompts::{match_query, MATCH_SYSTEM};

#[async_trait]
pub trait CandidateMatcher: Send + Sync {
    /// Scores `candidates` against `job_description`. The returned result is
    /// raw model output; callers filter unknown ids and sort.
    async fn match_candidates(
        &self,
        job_description: &str,
        candidates: &[MatchCandidate],
    ) -> Result<CandidateMatchResult, AppError>;
}

/// Production matcher: one schema-constrained structured generation call.
pub struct LlmCandidateMatcher {
    genai: GenAiClient,
}

impl LlmCandidateMatcher {
    pub fn new(genai: GenAiClient) -> Self {
        Self { genai }
    }
}

#[async_trait]
impl CandidateMatcher for LlmCandidateMatcher {
    async fn match_candidates(
        &self,
        job_description: &str,
        candidates: &[MatchCandidate],
    ) -> Result<CandidateMatchResult, AppError> {
        let query = match_query(job_description, candidates);
        self.genai
            .generate_structured(&query, MATCH_SYSTEM, candidate_match_schema())
            .await
            .map_err(|e| AppError::Llm(format!("candidate matching failed: {e}")))
    }
}

/// Matcher that answers 503 for every call; installed when API_KEY is absent.
pub struct UnconfiguredMatcher;

#[async_trait]
impl CandidateMatcher for UnconfiguredMatcher {
    async fn match_candidates(
        &self,
        _job_description: &str,
        _candidates: &[MatchCandidate],
    ) -> Result<CandidateMatchResult, AppError> {
        Err(AppError::AiUnavailable)
    }
}
