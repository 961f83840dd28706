//! Internal talent marketplace — debounced matching over the pipeline store.
//!
//! Every update to the broadcast job description restarts a quiet-period
//! timer; when the timer survives, all profile entries across all pipelines
//! are scored against the JD. A generation counter guarantees that only the
//! latest update's result is ever applied: a pending (still sleeping) trigger
//! is cancelled outright, and an in-flight model call that loses the race has
//! its result discarded on return.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::matching::matcher::CandidateMatcher;
use crate::matching::models::{join_recommendations, MatchCandidate, RecommendedCandidate};
use crate::pipeline::store::PipelineStore;

/// Quiet period after the last JD update before matching runs.
pub const DEBOUNCE: Duration = Duration::from_millis(1500);

#[derive(Debug, Default)]
struct BroadcastState {
    job_description: String,
    matching: bool,
    recommendations: Vec<RecommendedCandidate>,
}

/// Point-in-time view of the marketplace for the HTTP surface.
#[derive(Debug)]
pub struct MarketplaceSnapshot {
    pub job_description: String,
    pub matching: bool,
    pub recommendations: Vec<RecommendedCandidate>,
}

#[derive(Clone)]
pub struct Marketplace {
    store: Arc<RwLock<PipelineStore>>,
    matcher: Arc<dyn CandidateMatcher>,
    state: Arc<RwLock<BroadcastState>>,
    generation: Arc<AtomicU64>,
}

impl Marketplace {
    pub fn new(store: Arc<RwLock<PipelineStore>>, matcher: Arc<dyn CandidateMatcher>) -> Self {
        Self {
            store,
            matcher,
            state: Arc::new(RwLock::new(BroadcastState::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Stores the broadcast JD and (re)starts the debounce window.
    pub async fn set_job_description(&self, job_description: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.job_description = job_description;
        }

        let marketplace = self.clone();
        tokio::spawn(async move {
            marketplace.run_after_debounce(generation).await;
        });
    }

    pub async fn snapshot(&self) -> MarketplaceSnapshot {
        let state = self.state.read().await;
        MarketplaceSnapshot {
            job_description: state.job_description.clone(),
            matching: state.matching,
            recommendations: state.recommendations.clone(),
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn run_after_debounce(&self, generation: u64) {
        tokio::time::sleep(DEBOUNCE).await;

        // A newer update restarted the window while we slept.
        if !self.is_latest(generation) {
            debug!("matching trigger {generation} superseded during debounce");
            return;
        }

        let job_description = self.state.read().await.job_description.clone();
        let candidates = self.store.read().await.profile_candidates();

        if job_description.trim().is_empty() || candidates.is_empty() {
            let mut state = self.state.write().await;
            state.recommendations.clear();
            state.matching = false;
            return;
        }

        self.state.write().await.matching = true;

        let inputs: Vec<MatchCandidate> = candidates
            .iter()
            .map(|c| MatchCandidate {
                id: c.entry.id,
                anonymized_result: c.entry.anonymized_result().unwrap_or_default().to_string(),
            })
            .collect();

        debug!(
            "matching {} candidate(s) against broadcast JD (generation {generation})",
            inputs.len()
        );
        let result = self.matcher.match_candidates(&job_description, &inputs).await;

        // The call may have lost the race while in flight; never apply a
        // stale result over a newer generation's state.
        if !self.is_latest(generation) {
            debug!("matching result {generation} discarded as stale");
            return;
        }

        let mut state = self.state.write().await;
        state.matching = false;
        match result {
            Ok(result) => {
                state.recommendations = join_recommendations(&candidates, &result);
                debug!(
                    "matching complete: {} recommendation(s)",
                    state.recommendations.len()
                );
            }
            Err(e) => {
                warn!("broadcast matching failed: {e}");
                state.recommendations.clear();
            }
        }
    }
}
