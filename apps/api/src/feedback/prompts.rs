// Prompt builders for the generative feedback tool.

use crate::company::models::CompanyProfile;
use crate::pipeline::models::ApplicationStatus;

/// System prompt for feedback drafting. The hard constraint is the candidate
/// confidentiality rule: other candidates must never be mentioned.
pub fn feedback_system(company: &CompanyProfile) -> String {
    format!(
        "You are an ethical, professional, and empathetic HR assistant for {name}. Your \
         goal is to draft a personalized, non-robotic, and constructive communication \
         message to a job candidate. The tone must be supportive and encouraging, always \
         starting with a genuine appreciation for their time. Do not use generic phrases. \
         Clearly mention the specific strength and the ultimate differentiating factor \
         (skill gap or experience) based on the provided notes and the job description. \
         **Crucially, never mention the skills, performance, or existence of other \
         candidates in the message. Focus entirely on the recipient's fit against the job \
         requirements.** Use the company culture (Culture: \"{culture}\") and org \
         structure (Structure: \"{org_structure}\") to contextualize the message if \
         appropriate. For HIRED status, draft a welcoming confirmation message with \
         excitement. For REJECTED status, draft a supportive rejection message.",
        name = company.name,
        culture = company.culture,
        org_structure = company.org_structure,
    )
}

/// Builds the feedback drafting query.
pub fn feedback_query(
    candidate_name: &str,
    job_title: &str,
    company_name: &str,
    job_description: &str,
    interview_notes: &str,
    status: ApplicationStatus,
) -> String {
    format!(
        "Draft a personalized and constructive feedback message for the candidate \
         {candidate_name} who applied for the {job_title} role at {company_name}. The \
         final decision was '{status}'. Consider the job description: \
         \"{job_description}\". Use the following interview notes to highlight a specific \
         strength and clearly explain the skill gap or differentiator that led to the \
         final decision. Interview Notes: \"{interview_notes}\"",
        status = status.as_str(),
    )
}
