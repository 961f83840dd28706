use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One identified bias instance with its neutral replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasSuggestion {
    pub biased_phrase: String,
    pub neutral_suggestion: String,
    pub bias_type: String,
}

/// Full result of a bias audit.
///
/// Every field is required at deserialization: a model response missing
/// `suggestions` (or any other field) is a parse failure, never a partial
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// 1 (highly neutral) to 10 (heavily biased).
    pub bias_score: u8,
    /// "Low" (1-3), "Medium" (4-7), or "High" (8-10).
    pub risk_level: String,
    pub suggestions: Vec<BiasSuggestion>,
    pub revised_job_description: String,
}

/// Gemini `responseSchema` for the bias audit.
pub fn bias_audit_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "biasScore": {
                "type": "INTEGER",
                "description": "A score from 1 (lowest risk, highly neutral) to 10 (highest risk, heavily biased) indicating the level of bias in the JD. Score should be based on the number and severity of biases found."
            },
            "riskLevel": {
                "type": "STRING",
                "description": "The risk level, e.g., 'Low', 'Medium', or 'High', based on the score (1-3 Low, 4-7 Medium, 8-10 High)."
            },
            "suggestions": {
                "type": "ARRAY",
                "description": "A list of identified bias instances and recommended neutral replacements.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "biasedPhrase": { "type": "STRING", "description": "The original biased phrase found in the text." },
                        "neutralSuggestion": { "type": "STRING", "description": "The suggested neutral replacement phrase." },
                        "biasType": { "type": "STRING", "description": "The type of bias (e.g., 'Gendered Language', 'Age Bias', 'Competitive Tone', 'Intensity Jargon')." }
                    },
                    "required": ["biasedPhrase", "neutralSuggestion", "biasType"]
                }
            },
            "revisedJobDescription": {
                "type": "STRING",
                "description": "The complete, fully revised and neutral job description text based on all suggestions."
            }
        },
        "required": ["biasScore", "riskLevel", "suggestions", "revisedJobDescription"]
    })
}
