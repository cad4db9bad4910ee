// src/challenge/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Types
// ============================================================================

/// Résumé summary submitted by the caller. Lives for one request only.
///
/// Required fields default to empty on deserialization so that a missing key
/// reaches the validator and produces the per-field error envelope instead of
/// a framework-level rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    #[serde(default)]
    pub career_summary: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub technical_skills: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<QuestionItem>,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub expected_answer: String,
    pub tips: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathResponse {
    pub learning_steps: Vec<LearningStep>,
    pub summary: String,
    pub estimated_duration: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStep {
    pub step: String,
    pub description: String,
    pub priority: String,
    pub resources: String,
}

/// Combined payload for the comprehensive endpoint. Only built when both
/// sub-operations succeed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveResponse {
    pub interview_questions: InterviewQuestionsResponse,
    pub learning_path: LearningPathResponse,
}
