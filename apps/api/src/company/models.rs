use serde::{Deserialize, Serialize};

/// Metadata for a file attached to the company profile. Only metadata is
/// kept; file bytes never leave the client except as inline model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// The company profile tools use to contextualize prompts: fit summaries,
/// interview questions, feedback tone, and audit guidelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default)]
    pub org_structure: String,
    #[serde(default)]
    pub guidelines: String,
    #[serde(default)]
    pub files: Vec<FileMetadata>,
}

/// Which profile field to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    Culture,
    OrgStructure,
    Guidelines,
}
