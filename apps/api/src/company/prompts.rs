// Prompt constants and builders for the company profile and compensation tools.

use crate::company::models::CompanyField;

/// System prompt for profile field generation.
pub const COMPANY_FIELD_SYSTEM: &str = "You are a helpful HR and branding assistant. \
    Generate a concise, professional, and well-written response based on the user's \
    request for their company profile.";

/// Builds the user query for one profile field.
pub fn company_field_query(field: CompanyField, company_name: &str) -> String {
    match field {
        CompanyField::Culture => format!(
            "Generate a core company culture statement for a company named '{company_name}'. \
             The statement should be inspiring and suitable for a recruitment platform, \
             focusing on themes like collaboration, innovation, and employee growth. \
             Output a single paragraph."
        ),
        CompanyField::OrgStructure => format!(
            "Generate a brief, generic description of a common company organizational \
             structure for '{company_name}'. For example, 'Hierarchical with a flat \
             management layer in engineering. Report to managers, not directors.'"
        ),
        CompanyField::Guidelines => format!(
            "Generate a set of recruitment and job description guidelines for \
             '{company_name}'. The guidelines should promote inclusive and clear language, \
             and advise against using jargon or creating false urgency. \
             Format as a short paragraph."
        ),
    }
}

/// System prompt for the compensation engine. The query itself is grounded in
/// live search results, so the persona asks for up-to-date data.
pub fn compensation_system(company_name: &str) -> String {
    format!(
        "You are a compensation analyst for {company_name}. Provide a competitive, \
         up-to-date salary range (including the currency) and a brief justification \
         based on the provided role parameters. Use real-time data if possible."
    )
}

/// Builds the compensation lookup query.
pub fn compensation_query(
    job_title: &str,
    experience: &str,
    location: &str,
    industry: &str,
) -> String {
    format!(
        "Find the competitive total compensation range for a {experience} {job_title} role \
         in {location} in the {industry} sector. Provide the range and a compensation \
         breakdown."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_field_gets_a_distinct_query() {
        let culture = company_field_query(CompanyField::Culture, "Acme Corp");
        let org = company_field_query(CompanyField::OrgStructure, "Acme Corp");
        let guidelines = company_field_query(CompanyField::Guidelines, "Acme Corp");
        assert!(culture.contains("culture statement"));
        assert!(org.contains("organizational"));
        assert!(guidelines.contains("guidelines"));
        for query in [&culture, &org, &guidelines] {
            assert!(query.contains("'Acme Corp'"));
        }
    }

    #[test]
    fn test_compensation_query_includes_all_parameters() {
        let query = compensation_query(
            "Data Scientist",
            "Senior (8+ years)",
            "Berlin",
            "fintech",
        );
        for fragment in ["Data Scientist", "Senior (8+ years)", "Berlin", "fintech"] {
            assert!(query.contains(fragment));
        }
    }
}
