use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::GenAiClient;
use crate::matching::marketplace::Marketplace;
use crate::matching::matcher::{CandidateMatcher, LlmCandidateMatcher, UnconfiguredMatcher};
use crate::pipeline::store::PipelineStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when API_KEY is absent; AI endpoints answer 503.
    pub genai: Option<GenAiClient>,
    pub config: Config,
    /// The in-memory pipeline store, shared with the marketplace loop.
    pub pipelines: Arc<RwLock<PipelineStore>>,
    /// Pluggable matcher so the marketplace and match endpoint share one
    /// path and tests can stub the model.
    pub matcher: Arc<dyn CandidateMatcher>,
    pub marketplace: Marketplace,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let genai = config.api_key.clone().map(GenAiClient::new);
        let matcher: Arc<dyn CandidateMatcher> = match &genai {
            Some(client) => Arc::new(LlmCandidateMatcher::new(client.clone())),
            None => Arc::new(UnconfiguredMatcher),
        };
        let pipelines = Arc::new(RwLock::new(PipelineStore::new()));
        let marketplace = Marketplace::new(pipelines.clone(), matcher.clone());

        Self {
            genai,
            config,
            pipelines,
            matcher,
            marketplace,
        }
    }

    /// The Gemini client, or a 503 when no credential is configured.
    pub fn genai(&self) -> Result<&GenAiClient, AppError> {
        self.genai.as_ref().ok_or(AppError::AiUnavailable)
    }
}
