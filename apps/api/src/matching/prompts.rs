// Prompt builders for candidate matching.

use serde::Serialize;

use crate::matching::models::MatchCandidate;

/// System prompt for the matching call.
pub const MATCH_SYSTEM: &str = "You are an expert technical recruiter and talent sourcer. \
    Your task is to analyze a job description and a list of anonymized candidate \
    profiles. For each candidate, you must provide a 'matchScore' from 1-100 indicating \
    their suitability for the role, and a brief 'justification' for your score. Base \
    your analysis strictly on the skills, experience, and qualifications presented in \
    the profiles against the requirements in the job description. Do not make \
    assumptions.";

#[derive(Serialize)]
struct CandidateForPrompt<'a> {
    id: i64,
    profile: &'a str,
}

/// Builds the matching query: the job description and the candidate profiles
/// as a JSON block, delimited so the model cannot confuse the two.
pub fn match_query(job_description: &str, candidates: &[MatchCandidate]) -> String {
    let for_prompt: Vec<CandidateForPrompt> = candidates
        .iter()
        .map(|c| CandidateForPrompt {
            id: c.id,
            profile: &c.anonymized_result,
        })
        .collect();
    let candidates_json =
        serde_json::to_string_pretty(&for_prompt).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Please analyze the following job description and candidate profiles, then \
         return your analysis in the specified JSON format.\n\n\
         ### Job Description\n---\n{job_description}\n---\n\n\
         ### Candidate Profiles\n---\n{candidates_json}\n---"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_embeds_candidates_as_json() {
        let candidates = vec![
            MatchCandidate {
                id: 1,
                anonymized_result: "Rust engineer, 6 years".to_string(),
            },
            MatchCandidate {
                id: 2,
                anonymized_result: "Data scientist".to_string(),
            },
        ];
        let query = match_query("Seeking a Rust engineer.", &candidates);
        assert!(query.contains("### Job Description"));
        assert!(query.contains("Seeking a Rust engineer."));
        assert!(query.contains("\"id\": 1"));
        assert!(query.contains("Rust engineer, 6 years"));
        assert!(query.contains("\"id\": 2"));
    }
}
