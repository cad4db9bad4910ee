// src/challenge/handlers.rs
//! AI challenge endpoint handlers

use axum::{Extension, Json};
use std::sync::Arc;
use tracing::info;

use crate::common::error::ChallengeError;
use crate::common::state::AppState;

use super::models::{
    ComprehensiveResponse, InterviewQuestionsResponse, LearningPathResponse, ResumeRequest,
};

/// Generate tailored interview questions from a résumé summary.
/// POST /api/v1/ai-challenge/interview-questions
pub async fn generate_interview_questions(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<InterviewQuestionsResponse>, ChallengeError> {
    info!("Interview question generation requested");

    let response = state
        .challenge_service
        .generate_interview_questions(&request)
        .await?;

    Ok(Json(response))
}

/// Suggest a personalized learning path from a résumé summary.
/// POST /api/v1/ai-challenge/learning-path
pub async fn generate_learning_path(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<LearningPathResponse>, ChallengeError> {
    info!("Learning path generation requested");

    let response = state
        .challenge_service
        .generate_learning_path(&request)
        .await?;

    Ok(Json(response))
}

/// Generate interview questions and a learning path in one call.
/// POST /api/v1/ai-challenge/comprehensive
pub async fn generate_comprehensive(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ComprehensiveResponse>, ChallengeError> {
    info!("Comprehensive analysis requested");

    let response = state
        .challenge_service
        .generate_comprehensive(&request)
        .await?;

    Ok(Json(response))
}

/// GET /api/v1/ai-challenge/health
pub async fn health() -> &'static str {
    "AI Challenge API is running!"
}
