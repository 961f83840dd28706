//! Axum route handler for the bias audit tool.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::audit::models::{bias_audit_schema, AuditResult};
use crate::audit::prompts;
use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::FieldErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub job_description: String,
    /// Company recruitment guidelines to fold into the auditor persona.
    #[serde(default)]
    pub guidelines: String,
}

/// POST /api/jd/audit
///
/// Structured bias audit of a job description. The response is parsed
/// against `AuditResult`; a model response missing any required field
/// fails rather than producing a partial audit.
pub async fn handle_audit(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<AuditResult>, AppError> {
    let mut errors = FieldErrors::new();
    errors.require_non_empty("jobDescription", &request.job_description);
    errors.finish()?;

    let genai = state.genai()?;
    let system = prompts::audit_system(&request.guidelines);
    let query = prompts::audit_query(request.job_description.trim());
    let result: AuditResult = genai
        .generate_structured(&query, &system, bias_audit_schema())
        .await
        .map_err(|e| AppError::Llm(format!("bias audit failed: {e}")))?;

    tracing::info!(
        "Bias audit complete: score={}, risk={}, suggestions={}",
        result.bias_score,
        result.risk_level,
        result.suggestions.len()
    );

    Ok(Json(result))
}
