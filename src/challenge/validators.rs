// src/challenge/validators.rs

use super::models::ResumeRequest;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Resume Validators
// ============================================================================

pub struct ResumeValidator;

impl Validator<ResumeRequest> for ResumeValidator {
    fn validate(&self, data: &ResumeRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.career_summary.trim().is_empty() {
            result.add_error("careerSummary", "Career summary is required");
        } else if data.career_summary.chars().count() > 1000 {
            result.add_error(
                "careerSummary",
                "Career summary must be 1000 characters or fewer",
            );
        }

        if data.job_description.trim().is_empty() {
            result.add_error("jobDescription", "Job description is required");
        } else if data.job_description.chars().count() > 1000 {
            result.add_error(
                "jobDescription",
                "Job description must be 1000 characters or fewer",
            );
        }

        if data.technical_skills.trim().is_empty() {
            result.add_error("technicalSkills", "Technical skills are required");
        } else if data.technical_skills.chars().count() > 2000 {
            result.add_error(
                "technicalSkills",
                "Technical skills must be 2000 characters or fewer",
            );
        }

        if let Some(additional_info) = &data.additional_info {
            if additional_info.chars().count() > 500 {
                result.add_error(
                    "additionalInfo",
                    "Additional info must be 500 characters or fewer",
                );
            }
        }

        result
    }
}
