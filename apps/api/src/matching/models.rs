use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::pipeline::models::PipelineEntry;
use crate::pipeline::store::ProfileCandidate;

/// One candidate as submitted to the match endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub id: i64,
    pub anonymized_result: String,
}

/// One model recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMatch {
    pub candidate_id: i64,
    /// 1-100.
    pub match_score: u32,
    pub justification: String,
}

/// Structured model output for a matching call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatchResult {
    pub recommendations: Vec<CandidateMatch>,
}

/// A pipeline profile entry enriched with its match against the broadcast
/// job description, annotated with the pipeline it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCandidate {
    #[serde(flatten)]
    pub entry: PipelineEntry,
    pub match_score: u32,
    pub justification: String,
    pub pipeline_name: String,
}

/// Gemini `responseSchema` for candidate matching.
pub fn candidate_match_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendations": {
                "type": "ARRAY",
                "description": "A list of recommended candidates ranked by match score.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "candidateId": {
                            "type": "NUMBER",
                            "description": "The unique ID of the candidate from the input list."
                        },
                        "matchScore": {
                            "type": "INTEGER",
                            "description": "A score from 1 to 100 indicating how well the candidate's profile matches the job description."
                        },
                        "justification": {
                            "type": "STRING",
                            "description": "A brief, 1-2 sentence justification for the match score, highlighting key alignments or gaps."
                        }
                    },
                    "required": ["candidateId", "matchScore", "justification"]
                }
            }
        },
        "required": ["recommendations"]
    })
}

impl CandidateMatchResult {
    /// Drops recommendations whose `candidate_id` is not in the input set and
    /// sorts the rest descending by score. The model occasionally invents
    /// ids; those are discarded silently.
    pub fn filtered_to(mut self, known_ids: &[i64]) -> Self {
        self.recommendations
            .retain(|r| known_ids.contains(&r.candidate_id));
        self.recommendations
            .sort_by(|a, b| b.match_score.cmp(&a.match_score));
        self
    }
}

/// Joins model recommendations back onto the pipeline entries they scored.
/// Unknown ids are dropped; output is sorted descending by score.
pub fn join_recommendations(
    candidates: &[ProfileCandidate],
    result: &CandidateMatchResult,
) -> Vec<RecommendedCandidate> {
    let by_id: HashMap<i64, &ProfileCandidate> =
        candidates.iter().map(|c| (c.entry.id, c)).collect();

    let mut joined: Vec<RecommendedCandidate> = result
        .recommendations
        .iter()
        .filter_map(|rec| {
            by_id.get(&rec.candidate_id).map(|c| RecommendedCandidate {
                entry: c.entry.clone(),
                match_score: rec.match_score,
                justification: rec.justification.clone(),
                pipeline_name: c.pipeline_name.clone(),
            })
        })
        .collect();
    joined.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::models::EntryBody;
    use chrono::Utc;

    fn profile_candidate(id: i64, pipeline: &str) -> ProfileCandidate {
        ProfileCandidate {
            pipeline_name: pipeline.to_string(),
            entry: PipelineEntry {
                id,
                created_at: Utc::now(),
                body: EntryBody::Profile {
                    candidate_name: format!("Candidate {id}"),
                    anonymized_result: format!("profile {id}"),
                    fit_summary_result: String::new(),
                },
            },
        }
    }

    fn rec(candidate_id: i64, match_score: u32) -> CandidateMatch {
        CandidateMatch {
            candidate_id,
            match_score,
            justification: "relevant experience".to_string(),
        }
    }

    #[test]
    fn test_filtered_to_drops_unknown_ids() {
        let result = CandidateMatchResult {
            recommendations: vec![rec(1, 80), rec(99, 95), rec(2, 60)],
        };
        let filtered = result.filtered_to(&[1, 2]);
        let ids: Vec<i64> = filtered
            .recommendations
            .iter()
            .map(|r| r.candidate_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filtered_to_sorts_descending() {
        let result = CandidateMatchResult {
            recommendations: vec![rec(1, 40), rec(2, 90), rec(3, 70)],
        };
        let filtered = result.filtered_to(&[1, 2, 3]);
        let scores: Vec<u32> = filtered
            .recommendations
            .iter()
            .map(|r| r.match_score)
            .collect();
        assert_eq!(scores, vec![90, 70, 40]);
    }

    #[test]
    fn test_join_drops_unknown_and_sorts() {
        let candidates = vec![profile_candidate(1, "One"), profile_candidate(2, "Two")];
        let result = CandidateMatchResult {
            recommendations: vec![rec(2, 55), rec(404, 99), rec(1, 88)],
        };
        let joined = join_recommendations(&candidates, &result);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].entry.id, 1);
        assert_eq!(joined[0].match_score, 88);
        assert_eq!(joined[0].pipeline_name, "One");
        assert_eq!(joined[1].entry.id, 2);
    }

    #[test]
    fn test_recommended_candidate_flattens_entry_on_wire() {
        let candidates = vec![profile_candidate(5, "Backend")];
        let result = CandidateMatchResult {
            recommendations: vec![rec(5, 77)],
        };
        let joined = join_recommendations(&candidates, &result);
        let value = serde_json::to_value(&joined[0]).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["type"], "profile");
        assert_eq!(value["matchScore"], 77);
        assert_eq!(value["pipelineName"], "Backend");
    }

    #[test]
    fn test_match_result_missing_recommendations_is_parse_failure() {
        assert!(serde_json::from_str::<CandidateMatchResult>("{}").is_err());
    }
}
