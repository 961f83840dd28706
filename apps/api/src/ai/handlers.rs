//! Axum route handlers for the generic AI proxy.
//!
//! These endpoints carry client-assembled prompts straight to the model.
//! The server's own tools build their prompts server-side; this surface
//! exists for UI tools that compose prompts from local state.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::InlineFile;
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct StructuredResponse {
    pub result: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextRequest {
    pub user_query: String,
    pub system_prompt: String,
    #[serde(default)]
    pub use_search: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMultimodalRequest {
    pub user_query: String,
    pub system_prompt: String,
    #[serde(default)]
    pub files: Vec<InlineFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStructuredRequest {
    pub user_query: String,
    pub system_prompt: String,
    pub response_schema: Value,
}

fn validate_prompt_fields(user_query: &str, system_prompt: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("userQuery", user_query);
    errors.require_non_empty("systemPrompt", system_prompt);
    errors
}

/// POST /api/ai/text
pub async fn handle_generate_text(
    State(state): State<AppState>,
    Json(request): Json<GenerateTextRequest>,
) -> Result<Json<TextResponse>, AppError> {
    validate_prompt_fields(&request.user_query, &request.system_prompt).finish()?;

    let genai = state.genai()?;
    let text = genai
        .generate_text(&request.user_query, &request.system_prompt, request.use_search)
        .await
        .map_err(|e| AppError::Llm(format!("text generation failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/ai/multimodal
pub async fn handle_generate_multimodal(
    State(state): State<AppState>,
    Json(request): Json<GenerateMultimodalRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let mut errors = validate_prompt_fields(&request.user_query, &request.system_prompt);
    for (i, file) in request.files.iter().enumerate() {
        if file.base64.trim().is_empty() || file.mime_type.trim().is_empty() {
            errors.push("files", format!("file {i} must have base64 and mimeType"));
        }
    }
    errors.finish()?;

    let genai = state.genai()?;
    let text = genai
        .generate_multimodal(&request.user_query, &request.system_prompt, &request.files)
        .await
        .map_err(|e| AppError::Llm(format!("multimodal generation failed: {e}")))?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/ai/structured
pub async fn handle_generate_structured(
    State(state): State<AppState>,
    Json(request): Json<GenerateStructuredRequest>,
) -> Result<Json<StructuredResponse>, AppError> {
    let mut errors = validate_prompt_fields(&request.user_query, &request.system_prompt);
    if !request.response_schema.is_object() {
        errors.push("responseSchema", "must be a JSON schema object");
    }
    errors.finish()?;

    let genai = state.genai()?;
    let result = genai
        .generate_structured_value(
            &request.user_query,
            &request.system_prompt,
            request.response_schema,
        )
        .await
        .map_err(|e| AppError::Llm(format!("structured generation failed: {e}")))?;

    Ok(Json(StructuredResponse { result }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fields_both_required() {
        assert!(validate_prompt_fields("q", "s").finish().is_ok());
        assert!(validate_prompt_fields("", "s").finish().is_err());
        assert!(validate_prompt_fields("q", "  ").finish().is_err());
    }

    #[test]
    fn test_multimodal_request_defaults_files_empty() {
        let json = r#"{"userQuery": "q", "systemPrompt": "s"}"#;
        let request: GenerateMultimodalRequest = serde_json::from_str(json).unwrap();
        assert!(request.files.is_empty());
    }

    #[test]
    fn test_text_request_defaults_search_off() {
        let json = r#"{"userQuery": "q", "systemPrompt": "s"}"#;
        let request: GenerateTextRequest = serde_json::from_str(json).unwrap();
        assert!(!request.use_search);
    }
}
