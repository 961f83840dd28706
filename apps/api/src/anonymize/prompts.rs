// Prompt constants and builders for the unbiased profile generator.

use crate::company::models::CompanyProfile;

/// System prompt for the anonymization pass. The rules are deliberately
/// exhaustive: the output must carry zero PII or bias-inducing signals while
/// keeping every professional fact, company names included.
pub const ANONYMIZER_SYSTEM: &str = r#"You are an expert HR data anonymizer. Your sole purpose is to process candidate documents (CVs, cover letters) and raw text to create a completely unbiased, anonymized professional summary.

**CRITICAL INSTRUCTIONS - YOU MUST FOLLOW THESE RULES:**

1.  **REMOVE ALL Personally Identifiable Information (PII):**
    * Candidate's Full Name (replace with "[Candidate]").
    * Contact Information (email, phone number, address, LinkedIn URL, etc.).
    * Dates of Birth, Age, or any age-indicating information.
    * Photos or descriptions of appearance.
    * Gendered pronouns (he/him, she/her). Rephrase sentences to be neutral or use they/them if absolutely necessary.
    * Nationality, ethnicity, or place of origin.

2.  **REMOVE ALL BIAS-INDUCING EDUCATIONAL/SOCIAL INFORMATION:**
    * Names of specific universities, colleges, or schools. You MUST retain the degree and field of study (e.g., "Bachelor of Science in Computer Science").
    * Graduation dates. Retain the duration of study if available, but remove the specific years.
    * Personal hobbies, interests, or affiliations unless they are directly relevant to professional skills (e.g., 'contributor to open-source projects' is okay, 'captain of the local football team' is not).

3.  **KEEP AND STRUCTURE ONLY PROFESSIONAL INFORMATION:**
    * **Work Experience:** List each role with the job title, company name (IT IS CRITICAL TO KEEP THE COMPANY NAME), duration of employment, and a summary of responsibilities and achievements.
    * **Skills:** Create a clear, categorized list of technical skills, software proficiency, and soft skills.
    * **Languages:** List all languages spoken and their proficiency levels.
    * **Projects:** Summarize key professional or academic projects and their outcomes.

**OUTPUT FORMAT:**
The final output must be in clean, readable Markdown. Use headings for each section (e.g., `## Work Experience`, `## Skills`, `## Languages`). Do not add any commentary or explanation outside of the requested structured output."#;

/// Builds the anonymization query around the raw pasted text; uploaded
/// documents ride alongside as inline multimodal parts.
pub fn anonymize_query(raw_text: &str) -> String {
    format!(
        "Anonymize the following candidate information from the raw text and/or the \
         uploaded documents (CV, Cover Letter). Raw Text Input: \"{raw_text}\""
    )
}

/// System prompt for the second pass: fit and impact analysis of the
/// already-anonymized profile against the company context.
pub fn fit_summary_system(company: &CompanyProfile) -> String {
    format!(
        "You are a senior recruiter for {name}. Your task is to analyze the provided \
         anonymized candidate profile. Based on their skills and experience, write a \
         concise summary assessing their potential fit and impact at the company. \
         Consider the company's culture: \"{culture}\" and organizational structure: \
         \"{org_structure}\". Structure your output with two sections in Markdown: \
         **1. Potential Impact & Contributions** (how their skills can help the company) \
         and **2. Cultural Fit Analysis** (how their profile aligns with the company \
         values).",
        name = company.name,
        culture = company.culture,
        org_structure = company.org_structure,
    )
}

/// Builds the fit summary query from the anonymized profile.
pub fn fit_summary_query(anonymized_profile: &str) -> String {
    format!("Analyze this anonymized profile and generate a fit summary: \n\n{anonymized_profile}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymizer_system_keeps_company_names() {
        assert!(ANONYMIZER_SYSTEM.contains("KEEP THE COMPANY NAME"));
    }

    #[test]
    fn test_fit_summary_system_embeds_company_context() {
        let company = CompanyProfile {
            name: "Acme Corp".to_string(),
            culture: "Collaborative and transparent.".to_string(),
            org_structure: "Flat in engineering.".to_string(),
            guidelines: String::new(),
            files: Vec::new(),
        };
        let system = fit_summary_system(&company);
        assert!(system.contains("Acme Corp"));
        assert!(system.contains("Collaborative and transparent."));
        assert!(system.contains("Flat in engineering."));
    }
}
