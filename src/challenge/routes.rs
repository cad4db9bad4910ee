// src/challenge/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn challenge_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/ai-challenge/interview-questions",
            post(handlers::generate_interview_questions),
        )
        .route(
            "/api/v1/ai-challenge/learning-path",
            post(handlers::generate_learning_path),
        )
        .route(
            "/api/v1/ai-challenge/comprehensive",
            post(handlers::generate_comprehensive),
        )
        .route("/api/v1/ai-challenge/health", get(handlers::health))
}
