//! Axum route handler for interview question generation.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::ai::handlers::TextResponse;
use crate::company::models::CompanyProfile;
use crate::errors::AppError;
use crate::interview::prompts;
use crate::state::AppState;
use crate::validation::FieldErrors;

fn default_count() -> u8 {
    4
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub job_title: String,
    pub key_skills: String,
    pub experience: String,
    #[serde(default = "default_count")]
    pub technical_count: u8,
    #[serde(default = "default_count")]
    pub behavioral_count: u8,
    #[serde(default = "default_count")]
    pub culture_count: u8,
    pub company: CompanyProfile,
}

/// POST /api/interview/questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("jobTitle", &request.job_title);
    errors.require_non_empty("keySkills", &request.key_skills);
    errors.require_non_empty("experience", &request.experience);
    errors.require_non_empty("company.name", &request.company.name);
    if request.technical_count == 0
        && request.behavioral_count == 0
        && request.culture_count == 0
    {
        errors.push("technicalCount", "at least one question must be requested");
    }
    errors.finish()?;

    let genai = state.genai()?;
    let system = prompts::questions_system(&request.company);
    let query = prompts::questions_query(
        request.job_title.trim(),
        request.key_skills.trim(),
        request.experience.trim(),
        request.technical_count,
        request.behavioral_count,
        request.culture_count,
    );
    let text = genai
        .generate_text(&query, &system, false)
        .await
        .map_err(|e| AppError::Llm(format!("question generation failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}
