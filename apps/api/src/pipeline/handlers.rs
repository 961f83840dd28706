//! Axum route handlers for the pipeline store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::pipeline::models::{EntryBody, PipelineEntry};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PipelineView {
    pub name: String,
    pub entries: Vec<PipelineEntry>,
}

#[derive(Debug, Serialize)]
pub struct PipelinesResponse {
    pub pipelines: Vec<PipelineView>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePipelineRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePipelineResponse {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameEntryRequest {
    pub candidate_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

/// GET /api/pipelines
pub async fn handle_list_pipelines(State(state): State<AppState>) -> Json<PipelinesResponse> {
    let store = state.pipelines.read().await;
    let pipelines = store
        .pipelines()
        .iter()
        .map(|p| PipelineView {
            name: p.name.clone(),
            entries: p.entries.clone(),
        })
        .collect();
    Json(PipelinesResponse { pipelines })
}

/// POST /api/pipelines
///
/// Creates an empty pipeline. Empty and duplicate names are rejected.
pub async fn handle_create_pipeline(
    State(state): State<AppState>,
    Json(request): Json<CreatePipelineRequest>,
) -> Result<(StatusCode, Json<CreatePipelineResponse>), AppError> {
    let mut store = state.pipelines.write().await;
    let name = store.create_pipeline(&request.name)?;
    tracing::info!("Pipeline \"{name}\" created");
    Ok((StatusCode::CREATED, Json(CreatePipelineResponse { name })))
}

/// GET /api/pipelines/:name
pub async fn handle_get_pipeline(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PipelineView>, AppError> {
    let store = state.pipelines.read().await;
    let entries = store.entries(&name)?.to_vec();
    Ok(Json(PipelineView { name, entries }))
}

/// POST /api/pipelines/:name/entries
///
/// Appends a profile or feedback entry; the store assigns the id.
pub async fn handle_append_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<EntryBody>,
) -> Result<(StatusCode, Json<PipelineEntry>), AppError> {
    let mut store = state.pipelines.write().await;
    let entry = store.append_entry(&name, body)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/pipelines/:name/entries/:id
///
/// Renames the entry's display name. Empty names are rejected.
pub async fn handle_rename_entry(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, i64)>,
    Json(request): Json<RenameEntryRequest>,
) -> Result<Json<PipelineEntry>, AppError> {
    let mut store = state.pipelines.write().await;
    let entry = store.rename_entry(&name, id, &request.candidate_name)?;
    Ok(Json(entry))
}

/// DELETE /api/pipelines/:name/entries/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.pipelines.write().await;
    store.delete_entry(&name, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/pipelines/:name/reorder
///
/// Drag-and-drop move: remove at `from`, insert at `to`.
pub async fn handle_reorder(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<ReorderRequest>,
) -> Result<Json<PipelineView>, AppError> {
    let mut store = state.pipelines.write().await;
    store.reorder(&name, request.from, request.to)?;
    let entries = store.entries(&name)?.to_vec();
    Ok(Json(PipelineView { name, entries }))
}
