// src/challenge/service.rs

use std::sync::Arc;
use tracing::info;

use crate::common::error::ChallengeError;
use crate::common::Validator;
use crate::services::openai::OpenAIService;

use super::models::{
    ComprehensiveResponse, InterviewQuestionsResponse, LearningPathResponse, ResumeRequest,
};
use super::validators::ResumeValidator;
use super::{parser, prompts};

/// Orchestrates one generation operation: validate input, build the prompt,
/// call the gateway, parse the reply. Holds no per-request state.
#[derive(Debug)]
pub struct ChallengeService {
    openai: Arc<OpenAIService>,
}

impl ChallengeService {
    pub fn new(openai: Arc<OpenAIService>) -> Self {
        Self { openai }
    }

    pub async fn generate_interview_questions(
        &self,
        request: &ResumeRequest,
    ) -> Result<InterviewQuestionsResponse, ChallengeError> {
        self.check_input(request)?;

        let prompt = prompts::interview_questions_prompt(request);
        let raw = self.openai.complete(&prompt).await?;
        let response = parser::parse_interview_questions(&raw)?;

        info!(
            questions = response.questions.len(),
            "Interview questions generated"
        );

        Ok(response)
    }

    pub async fn generate_learning_path(
        &self,
        request: &ResumeRequest,
    ) -> Result<LearningPathResponse, ChallengeError> {
        self.check_input(request)?;

        let prompt = prompts::learning_path_prompt(request);
        let raw = self.openai.complete(&prompt).await?;
        let response = parser::parse_learning_path(&raw)?;

        info!(
            steps = response.learning_steps.len(),
            "Learning path generated"
        );

        Ok(response)
    }

    /// Runs both generations concurrently; either failure fails the whole
    /// operation, so a partial comprehensive payload is never returned.
    pub async fn generate_comprehensive(
        &self,
        request: &ResumeRequest,
    ) -> Result<ComprehensiveResponse, ChallengeError> {
        self.check_input(request)?;

        let (interview_questions, learning_path) = tokio::try_join!(
            self.generate_interview_questions(request),
            self.generate_learning_path(request),
        )?;

        info!("Comprehensive analysis generated");

        Ok(ComprehensiveResponse {
            interview_questions,
            learning_path,
        })
    }

    /// Input validation runs before any model call is attempted.
    fn check_input(&self, request: &ResumeRequest) -> Result<(), ChallengeError> {
        let result = ResumeValidator.validate(request);
        if result.is_valid {
            Ok(())
        } else {
            Err(ChallengeError::Validation(result))
        }
    }
}
