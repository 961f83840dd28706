//! Axum route handlers for candidate matching and the broadcast marketplace.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::models::{CandidateMatchResult, MatchCandidate, RecommendedCandidate};
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub job_description: String,
    pub candidates: Vec<MatchCandidate>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub result: CandidateMatchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastJobRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    pub job_description: String,
    pub matching: bool,
    pub recommendations: Vec<RecommendedCandidate>,
}

/// POST /api/candidates/match
///
/// One-shot matching over caller-supplied candidates. Recommendations whose
/// id is not in the input set are discarded; output is sorted by score.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("jobDescription", &request.job_description);
    if request.candidates.is_empty() {
        errors.push("candidates", "must contain at least one candidate");
    }
    for (i, candidate) in request.candidates.iter().enumerate() {
        if candidate.anonymized_result.trim().is_empty() {
            errors.push(
                "candidates",
                format!("candidate {i} must have a non-empty anonymizedResult"),
            );
        }
    }
    errors.finish()?;

    let result = state
        .matcher
        .match_candidates(&request.job_description, &request.candidates)
        .await?;

    let known_ids: Vec<i64> = request.candidates.iter().map(|c| c.id).collect();
    Ok(Json(MatchResponse {
        result: result.filtered_to(&known_ids),
    }))
}

/// PUT /api/broadcast/job
///
/// Stores the broadcast JD and restarts the marketplace debounce window.
/// Matching itself runs in the background; poll GET /api/broadcast/matches.
pub async fn handle_set_broadcast_job(
    State(state): State<AppState>,
    Json(request): Json<BroadcastJobRequest>,
) -> Result<StatusCode, AppError> {
    state
        .marketplace
        .set_job_description(request.job_description)
        .await;
    Ok(StatusCode::ACCEPTED)
}

/// GET /api/broadcast/matches
pub async fn handle_get_matches(State(state): State<AppState>) -> Json<MatchesResponse> {
    let snapshot = state.marketplace.snapshot().await;
    Json(MatchesResponse {
        job_description: snapshot.job_description,
        matching: snapshot.matching,
        recommendations: snapshot.recommendations,
    })
}
