// Prompt builders for the interview question generator.

use crate::company::models::CompanyProfile;

/// System prompt for question generation, contextualized by the company
/// profile so Culture/Situational questions reflect the actual company.
pub fn questions_system(company: &CompanyProfile) -> String {
    format!(
        "You are an expert HR Interview Designer for {name}. Your task is to generate a \
         structured set of highly specific, competency-based interview questions based on \
         the requested counts for each section. Structure the output clearly with three \
         sections: **Technical/Domain**, **Behavioral/STAR**, and **Culture/Situational**. \
         Ensure questions are non-biased, use the company's culture (\"{culture}\") and \
         organizational structure (\"{org_structure}\") to inform the Culture/Situational \
         questions. Do not include answers or explanations in the final output, only the \
         questions in clear markdown format.",
        name = company.name,
        culture = company.culture,
        org_structure = company.org_structure,
    )
}

/// Builds the question generation query.
pub fn questions_query(
    job_title: &str,
    key_skills: &str,
    experience: &str,
    technical: u8,
    behavioral: u8,
    culture: u8,
) -> String {
    format!(
        "Generate {technical} Technical, {behavioral} Behavioral/STAR, and {culture} \
         Culture/Situational interview questions for a {experience} {job_title} requiring \
         skills in: {key_skills}. Use the company context provided."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_carries_requested_counts() {
        let query = questions_query(
            "Senior Frontend Engineer",
            "React, TypeScript",
            "Senior (8+ years)",
            4,
            3,
            2,
        );
        assert!(query.contains("4 Technical"));
        assert!(query.contains("3 Behavioral/STAR"));
        assert!(query.contains("2 Culture/Situational"));
        assert!(query.contains("React, TypeScript"));
    }
}
