// src/challenge/prompts.rs
//! Fixed prompt templates for the two generation operations.
//!
//! Pure string interpolation; no escaping is applied, so downstream code must
//! not assume prompt content is sanitized.

use super::models::ResumeRequest;

/// Substituted when the optional résumé field is absent.
const ABSENT_FIELD_PLACEHOLDER: &str = "none";

pub fn interview_questions_prompt(resume: &ResumeRequest) -> String {
    format!(
        "Generate 5 interview questions based on this resume (reply must be 3000 characters or fewer):\n\
        Career: {}\n\
        Role: {}\n\
        Skills: {}\n\
        Additional: {}\n\
        \n\
        Requirements:\n\
        - Cover the categories: technical competence, project experience, problem solving, teamwork, growth motivation\n\
        - Difficulty levels: beginner/intermediate/advanced\n\
        - Include an expected answer and tips with every question\n\
        - Keep the reply concise, 3000 characters or fewer\n\
        - Lead with the essentials and skip unnecessary explanation\n\
        \n\
        A complete JSON reply is mandatory:\n\
        {{\n\
          \"questions\": [\n\
            {{\n\
              \"question\": \"the question\",\n\
              \"category\": \"the category\",\n\
              \"difficulty\": \"the difficulty\",\n\
              \"expectedAnswer\": \"the expected answer\",\n\
              \"tips\": \"tips\"\n\
            }}\n\
          ],\n\
          \"analysis\": \"overall analysis\"\n\
        }}\n\
        \n\
        Important: the JSON must be complete; make sure the reply is not cut off mid-way.",
        resume.career_summary,
        resume.job_description,
        resume.technical_skills,
        resume
            .additional_info
            .as_deref()
            .unwrap_or(ABSENT_FIELD_PLACEHOLDER),
    )
}

pub fn learning_path_prompt(resume: &ResumeRequest) -> String {
    format!(
        "Suggest a personalized learning path based on this resume (reply must be 3000 characters or fewer):\n\
        Career: {}\n\
        Role: {}\n\
        Skills: {}\n\
        Additional: {}\n\
        \n\
        Requirements:\n\
        - Analyze current strengths and identify gaps\n\
        - Cover deepening the tech stack, project experience, and communication skills\n\
        - Include a priority and an estimated duration for every step\n\
        - Keep the guidance realistic and achievable\n\
        - Keep the reply concise, 3000 characters or fewer\n\
        - Favor concrete, practical content\n\
        \n\
        A complete JSON reply is mandatory:\n\
        {{\n\
          \"summary\": \"overall summary\",\n\
          \"learningSteps\": [\n\
            {{\n\
              \"step\": \"step name\",\n\
              \"description\": \"detailed description\",\n\
              \"priority\": \"priority\",\n\
              \"resources\": \"learning resources and methods\"\n\
            }}\n\
          ],\n\
          \"estimatedDuration\": \"total estimated duration\"\n\
        }}\n\
        \n\
        Important: the JSON must be complete; make sure the reply is not cut off mid-way.",
        resume.career_summary,
        resume.job_description,
        resume.technical_skills,
        resume
            .additional_info
            .as_deref()
            .unwrap_or(ABSENT_FIELD_PLACEHOLDER),
    )
}
