// Prompt builders for the bias audit tool.

/// System prompt for the audit. Pushes the model to drive the score to 1-3
/// and folds the company's own recruitment guidelines into the persona.
pub fn audit_system(guidelines: &str) -> String {
    format!(
        "You are a hyper-critical recruitment bias auditor and simplification expert. \
         Your primary goal is to drive the bias score down to 1-3. Analyze the job \
         description exhaustively for ALL forms of exclusionary language: \
         1. **Gender/Age/Ethnicity Bias** (e.g., 'rockstar', 'guru', 'manpower', 'young'). \
         2. **Competitive/Aggressive Tone** (e.g., 'must dominate', 'killer code', \
         'crush metrics'). Replace with collaborative or professional terms. \
         3. **Intensity/Urgency** (e.g., 'fast-paced', 'high-octane', 'heavy lifting'). \
         Replace with calm, accurate descriptions. \
         4. **Simplification:** Identify overly complex or jargon-heavy recruiter \
         boilerplate for plain language replacement.\n\n\
         Current Company Guidelines: \"{guidelines}\".\n\n\
         Provide a severity score (1-10) and a list of *comprehensive, non-overlapping* \
         suggestions. The `revisedJobDescription` MUST be simplified and neutral, \
         reflecting all suggestions to achieve a score of 1-3."
    )
}

/// Builds the audit user query.
pub fn audit_query(job_description: &str) -> String {
    format!(
        "Audit this Job Description for bias and provide a score, risk level, \
         and suggestions: \"{job_description}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_embeds_guidelines() {
        let system = audit_system("Use inclusive, plain language.");
        assert!(system.contains("Use inclusive, plain language."));
    }

    #[test]
    fn test_query_embeds_job_description() {
        let query = audit_query("We need a coding ninja.");
        assert!(query.contains("We need a coding ninja."));
    }
}
