//! Axum route handler for feedback drafting.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::ai::handlers::TextResponse;
use crate::company::models::CompanyProfile;
use crate::errors::AppError;
use crate::feedback::prompts;
use crate::pipeline::models::ApplicationStatus;
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub candidate_name: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub interview_notes: String,
    pub status: ApplicationStatus,
    pub company: CompanyProfile,
}

/// POST /api/feedback/generate
///
/// Drafts a hired/rejected message from interview notes. Search grounding is
/// enabled so the draft can reference current norms for the role.
pub async fn handle_generate_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("candidateName", &request.candidate_name);
    errors.require_non_empty("jobTitle", &request.job_title);
    errors.require_non_empty("companyName", &request.company_name);
    errors.require_non_empty("jobDescription", &request.job_description);
    errors.require_non_empty("interviewNotes", &request.interview_notes);
    errors.finish()?;

    let genai = state.genai()?;
    let system = prompts::feedback_system(&request.company);
    let query = prompts::feedback_query(
        request.candidate_name.trim(),
        request.job_title.trim(),
        request.company_name.trim(),
        request.job_description.trim(),
        request.interview_notes.trim(),
        request.status,
    );
    let text = genai
        .generate_text(&query, &system, true)
        .await
        .map_err(|e| AppError::Llm(format!("feedback generation failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}
