// src/challenge/parser.rs
//! Defensive validation and tolerant parsing of raw model output.
//!
//! Model output is untrusted and frequently truncated by token limits. Cheap
//! structural checks reject obviously broken text before the full decode, and
//! extraction is tolerant at item granularity so one bad array element does
//! not discard the rest of a usable response.

use serde_json::Value;
use tracing::warn;

use super::models::{
    InterviewQuestionsResponse, LearningPathResponse, LearningStep, QuestionItem,
};

/// Substituted for any missing or null string field on an item.
pub const MISSING_FIELD_SENTINEL: &str = "no information";

/// Hard ceiling on the trimmed model reply, mirrored in the prompt templates.
pub const MAX_RESPONSE_CHARS: usize = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("model response was empty")]
    Empty,

    #[error("model response is not a JSON object")]
    NotJson,

    #[error("model response has unbalanced braces ({open} open, {close} close)")]
    Unbalanced { open: usize, close: usize },

    #[error("model response exceeds {limit} characters ({0})", limit = MAX_RESPONSE_CHARS)]
    TooLong(usize),

    #[error("model response could not be decoded: {0}")]
    Malformed(String),

    #[error("model response contained no usable items")]
    NoItems,
}

pub fn parse_interview_questions(raw: &str) -> Result<InterviewQuestionsResponse, ParseError> {
    let root = decode(raw)?;

    let mut questions = Vec::new();
    if let Some(items) = root.get("questions").and_then(Value::as_array) {
        for item in items {
            if !item.is_object() {
                warn!(element = %item, "skipping malformed question element");
                continue;
            }
            questions.push(QuestionItem {
                question: item_text(item, "question"),
                category: item_text(item, "category"),
                difficulty: item_text(item, "difficulty"),
                expected_answer: item_text(item, "expectedAnswer"),
                tips: item_text(item, "tips"),
            });
        }
    }

    if questions.is_empty() {
        warn!("model response contained no parsable questions");
        return Err(ParseError::NoItems);
    }

    Ok(InterviewQuestionsResponse {
        questions,
        analysis: scalar_text(&root, "analysis"),
    })
}

pub fn parse_learning_path(raw: &str) -> Result<LearningPathResponse, ParseError> {
    let root = decode(raw)?;

    let mut learning_steps = Vec::new();
    if let Some(items) = root.get("learningSteps").and_then(Value::as_array) {
        for item in items {
            if !item.is_object() {
                warn!(element = %item, "skipping malformed learning step element");
                continue;
            }
            learning_steps.push(LearningStep {
                step: item_text(item, "step"),
                description: item_text(item, "description"),
                priority: item_text(item, "priority"),
                resources: item_text(item, "resources"),
            });
        }
    }

    if learning_steps.is_empty() {
        warn!("model response contained no parsable learning steps");
        return Err(ParseError::NoItems);
    }

    Ok(LearningPathResponse {
        learning_steps,
        summary: scalar_text(&root, "summary"),
        estimated_duration: scalar_text(&root, "estimatedDuration"),
    })
}

/// Structural checks followed by the full decode, short-circuiting in order:
/// emptiness, bracket shape, brace balance, length ceiling, JSON validity.
fn decode(raw: &str) -> Result<Value, ParseError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        warn!("model response was empty");
        return Err(ParseError::Empty);
    }

    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        warn!(response = %trimmed, "model response is not a JSON object");
        return Err(ParseError::NotJson);
    }

    // Cheap completeness heuristic: counts every brace, including braces
    // inside string literals. Catches truncated replies before the decode.
    let open = trimmed.chars().filter(|&c| c == '{').count();
    let close = trimmed.chars().filter(|&c| c == '}').count();
    if open != close {
        warn!(open, close, response = %trimmed, "model response has unbalanced braces");
        return Err(ParseError::Unbalanced { open, close });
    }

    let length = trimmed.chars().count();
    if length > MAX_RESPONSE_CHARS {
        warn!(length, "model response exceeds the length ceiling");
        return Err(ParseError::TooLong(length));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        warn!(error = %e, response = %trimmed, "model response could not be decoded");
        ParseError::Malformed(e.to_string())
    })
}

/// String field on an array item; missing or null yields the sentinel.
/// Numbers and booleans render as their text form, containers as empty text.
fn item_text(item: &Value, field: &str) -> String {
    match item.get(field) {
        None | Some(Value::Null) => MISSING_FIELD_SENTINEL.to_string(),
        Some(value) => value_text(value),
    }
}

/// Optional top-level scalar; missing or null yields an empty string.
fn scalar_text(root: &Value, field: &str) -> String {
    match root.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_text(value),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => String::new(),
        other => other.to_string(),
    }
}
