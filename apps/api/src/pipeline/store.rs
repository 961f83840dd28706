//! In-memory pipeline store.
//!
//! Holds named ordered lists of entries for the lifetime of the process.
//! Pipeline names are unique and case-sensitive; entry order is user-chosen
//! (drag-and-drop in the UI) and significant. Entries are only ever removed
//! by explicit request.

use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::errors::AppError;
use crate::pipeline::models::{EntryBody, PipelineEntry};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Pipeline name cannot be empty")]
    EmptyPipelineName,

    #[error("A pipeline named \"{0}\" already exists")]
    DuplicatePipeline(String),

    #[error("No pipeline named \"{0}\"")]
    UnknownPipeline(String),

    #[error("No entry with id {0}")]
    UnknownEntry(i64),

    #[error("Candidate name cannot be empty")]
    EmptyCandidateName,

    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownPipeline(_) | StoreError::UnknownEntry(_) => {
                AppError::NotFound(err.to_string())
            }
            other => AppError::Validation(json!({ "formErrors": [other.to_string()] })),
        }
    }
}

/// A single named pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub name: String,
    pub entries: Vec<PipelineEntry>,
}

/// A profile entry paired with the pipeline it came from, for matching.
#[derive(Debug, Clone)]
pub struct ProfileCandidate {
    pub pipeline_name: String,
    pub entry: PipelineEntry,
}

/// All pipelines for this process, in creation order.
#[derive(Debug, Default)]
pub struct PipelineStore {
    pipelines: Vec<Pipeline>,
    next_id: i64,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    fn find(&self, name: &str) -> Result<&Pipeline, StoreError> {
        self.pipelines
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::UnknownPipeline(name.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Pipeline, StoreError> {
        self.pipelines
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::UnknownPipeline(name.to_string()))
    }

    /// Creates an empty pipeline. The name is trimmed first; empty and
    /// duplicate names are rejected and the pipeline set is left unchanged.
    pub fn create_pipeline(&mut self, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyPipelineName);
        }
        if self.pipelines.iter().any(|p| p.name == name) {
            return Err(StoreError::DuplicatePipeline(name.to_string()));
        }
        self.pipelines.push(Pipeline {
            name: name.to_string(),
            entries: Vec::new(),
        });
        Ok(name.to_string())
    }

    pub fn entries(&self, pipeline: &str) -> Result<&[PipelineEntry], StoreError> {
        Ok(&self.find(pipeline)?.entries)
    }

    /// Appends an entry, assigning the next monotonic id.
    pub fn append_entry(
        &mut self,
        pipeline: &str,
        body: EntryBody,
    ) -> Result<PipelineEntry, StoreError> {
        // Reserve the id only once the target pipeline is known to exist.
        self.find(pipeline)?;
        self.next_id += 1;
        let entry = PipelineEntry {
            id: self.next_id,
            created_at: Utc::now(),
            body,
        };
        self.find_mut(pipeline)?.entries.push(entry.clone());
        Ok(entry)
    }

    /// Renames an entry's display name. Empty names are rejected.
    pub fn rename_entry(
        &mut self,
        pipeline: &str,
        id: i64,
        candidate_name: &str,
    ) -> Result<PipelineEntry, StoreError> {
        let candidate_name = candidate_name.trim();
        if candidate_name.is_empty() {
            return Err(StoreError::EmptyCandidateName);
        }
        let entry = self
            .find_mut(pipeline)?
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::UnknownEntry(id))?;
        entry.set_candidate_name(candidate_name.to_string());
        Ok(entry.clone())
    }

    /// Removes exactly the entry with the given id, leaving the order of the
    /// remaining entries unchanged.
    pub fn delete_entry(&mut self, pipeline: &str, id: i64) -> Result<(), StoreError> {
        let entries = &mut self.find_mut(pipeline)?.entries;
        let position = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::UnknownEntry(id))?;
        entries.remove(position);
        Ok(())
    }

    /// Drag-and-drop move: remove at `from`, insert at `to` (a splice pair).
    pub fn reorder(&mut self, pipeline: &str, from: usize, to: usize) -> Result<(), StoreError> {
        let entries = &mut self.find_mut(pipeline)?.entries;
        let len = entries.len();
        if from >= len {
            return Err(StoreError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(StoreError::IndexOutOfRange { index: to, len });
        }
        let entry = entries.remove(from);
        entries.insert(to, entry);
        Ok(())
    }

    /// All profile-type entries across every pipeline, tagged with their
    /// source pipeline name. Input to candidate matching.
    pub fn profile_candidates(&self) -> Vec<ProfileCandidate> {
        self.pipelines
            .iter()
            .flat_map(|p| {
                p.entries
                    .iter()
                    .filter(|e| e.is_profile())
                    .map(|e| ProfileCandidate {
                        pipeline_name: p.name.clone(),
                        entry: e.clone(),
                    })
            })
            .collect()
    }
}
