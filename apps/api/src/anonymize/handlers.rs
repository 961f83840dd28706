//! Axum route handler for the unbiased profile generator.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::anonymize::prompts;
use crate::company::models::CompanyProfile;
use crate::errors::AppError;
use crate::llm_client::InlineFile;
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymizeRequest {
    /// Pasted candidate text. May be empty when documents are attached.
    #[serde(default)]
    pub raw_text: String,
    /// CV / cover letter attachments, base64-encoded.
    #[serde(default)]
    pub files: Vec<InlineFile>,
    pub company: CompanyProfile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymizeResponse {
    pub anonymized_result: String,
    pub fit_summary_result: String,
}

/// POST /api/candidates/anonymize
///
/// Two model calls in sequence: a multimodal anonymization pass over the raw
/// text and attached documents, then a fit summary of the anonymized profile
/// against the company context.
pub async fn handle_anonymize(
    State(state): State<AppState>,
    Json(request): Json<AnonymizeRequest>,
) -> Result<Json<AnonymizeResponse>, AppError> {
    let mut errors = FieldErrors::new();
    if request.raw_text.trim().is_empty() && request.files.is_empty() {
        errors.push("rawText", "provide raw text or at least one document");
    }
    for (i, file) in request.files.iter().enumerate() {
        if file.base64.trim().is_empty() || file.mime_type.trim().is_empty() {
            errors.push("files", format!("file {i} must have base64 and mimeType"));
        }
    }
    errors.require_non_empty("company.name", &request.company.name);
    errors.finish()?;

    let genai = state.genai()?;

    let anonymized_result = genai
        .generate_multimodal(
            &prompts::anonymize_query(request.raw_text.trim()),
            prompts::ANONYMIZER_SYSTEM,
            &request.files,
        )
        .await
        .map_err(|e| AppError::Llm(format!("anonymization failed: {e}")))?;

    let fit_summary_result = genai
        .generate_text(
            &prompts::fit_summary_query(&anonymized_result),
            &prompts::fit_summary_system(&request.company),
            false,
        )
        .await
        .map_err(|e| AppError::Llm(format!("fit summary failed: {e}")))?;

    Ok(Json(AnonymizeResponse {
        anonymized_result,
        fit_summary_result,
    }))
}
