use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final decision recorded on a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Hired => "HIRED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

/// The payload of a pipeline entry as submitted by a client.
/// The `type` tag determines which fields are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryBody {
    #[serde(rename_all = "camelCase")]
    Profile {
        candidate_name: String,
        anonymized_result: String,
        fit_summary_result: String,
    },
    #[serde(rename_all = "camelCase")]
    Feedback {
        candidate_name: String,
        job_title: String,
        application_status: ApplicationStatus,
        feedback_message: String,
    },
}

impl EntryBody {
    pub fn candidate_name(&self) -> &str {
        match self {
            EntryBody::Profile { candidate_name, .. } => candidate_name,
            EntryBody::Feedback { candidate_name, .. } => candidate_name,
        }
    }
}

/// A stored pipeline entry. Ids are assigned by the store from a monotonic
/// counter, so rapid sequential saves can never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: EntryBody,
}

impl PipelineEntry {
    pub fn candidate_name(&self) -> &str {
        self.body.candidate_name()
    }

    pub fn set_candidate_name(&mut self, name: String) {
        match &mut self.body {
            EntryBody::Profile { candidate_name, .. } => *candidate_name = name,
            EntryBody::Feedback { candidate_name, .. } => *candidate_name = name,
        }
    }

    pub fn is_profile(&self) -> bool {
        matches!(self.body, EntryBody::Profile { .. })
    }

    /// Anonymized profile text, if this is a profile entry.
    pub fn anonymized_result(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Profile {
                anonymized_result, ..
            } => Some(anonymized_result),
            EntryBody::Feedback { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_body() -> EntryBody {
        EntryBody::Profile {
            candidate_name: "Candidate A".to_string(),
            anonymized_result: "## Work Experience\n...".to_string(),
            fit_summary_result: "Strong fit.".to_string(),
        }
    }

    #[test]
    fn test_entry_serializes_with_type_tag() {
        let entry = PipelineEntry {
            id: 7,
            created_at: Utc::now(),
            body: profile_body(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "profile");
        assert_eq!(value["id"], 7);
        assert_eq!(value["candidateName"], "Candidate A");
        assert_eq!(value["anonymizedResult"], "## Work Experience\n...");
    }

    #[test]
    fn test_feedback_entry_round_trips() {
        let json = r#"{
            "type": "feedback",
            "candidateName": "Marcus Chen",
            "jobTitle": "Frontend Developer",
            "applicationStatus": "REJECTED",
            "feedbackMessage": "Thank you for your time..."
        }"#;
        let body: EntryBody = serde_json::from_str(json).unwrap();
        match &body {
            EntryBody::Feedback {
                application_status, ..
            } => assert_eq!(*application_status, ApplicationStatus::Rejected),
            _ => panic!("expected feedback entry"),
        }
        assert_eq!(body.candidate_name(), "Marcus Chen");
    }

    #[test]
    fn test_application_status_uppercase_on_wire() {
        let value = serde_json::to_value(ApplicationStatus::Hired).unwrap();
        assert_eq!(value, "HIRED");
    }
}
