//! Axum route handlers for company profile generation and compensation lookups.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::ai::handlers::TextResponse;
use crate::company::models::CompanyField;
use crate::company::prompts;
use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFieldRequest {
    pub field: String,
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRequest {
    pub job_title: String,
    pub experience: String,
    pub location: String,
    pub industry: String,
    pub company_name: String,
}

fn parse_field(raw: &str) -> Option<CompanyField> {
    serde_json::from_value(Value::String(raw.to_string())).ok()
}

/// POST /api/company/generate-field
///
/// Generates one profile field (culture, orgStructure, or guidelines).
pub async fn handle_generate_field(
    State(state): State<AppState>,
    Json(request): Json<GenerateFieldRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("companyName", &request.company_name);
    let field = match parse_field(&request.field) {
        Some(field) => Some(field),
        None => {
            errors.push(
                "field",
                "must be one of: culture, orgStructure, guidelines",
            );
            None
        }
    };
    errors.finish()?;
    let field = field.expect("field validated above");

    let genai = state.genai()?;
    let query = prompts::company_field_query(field, request.company_name.trim());
    let text = genai
        .generate_text(&query, prompts::COMPANY_FIELD_SYSTEM, false)
        .await
        .map_err(|e| AppError::Llm(format!("company field generation failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/compensation/calculate
///
/// Search-grounded compensation range lookup for a role.
pub async fn handle_calculate_compensation(
    State(state): State<AppState>,
    Json(request): Json<CompensationRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("jobTitle", &request.job_title);
    errors.require_non_empty("experience", &request.experience);
    errors.require_non_empty("location", &request.location);
    errors.require_non_empty("industry", &request.industry);
    errors.require_non_empty("companyName", &request.company_name);
    errors.finish()?;

    let genai = state.genai()?;
    let system = prompts::compensation_system(request.company_name.trim());
    let query = prompts::compensation_query(
        request.job_title.trim(),
        request.experience.trim(),
        request.location.trim(),
        request.industry.trim(),
    );
    let text = genai
        .generate_text(&query, &system, true)
        .await
        .map_err(|e| AppError::Llm(format!("compensation lookup failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}
