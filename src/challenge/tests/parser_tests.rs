// src/challenge/tests/parser_tests.rs

#[cfg(test)]
mod tests {
    use crate::challenge::parser::*;

    const VALID_QUESTIONS: &str = r#"{
        "questions": [
            {
                "question": "Describe a production incident you resolved",
                "category": "problem solving",
                "difficulty": "intermediate",
                "expectedAnswer": "A structured walkthrough of the incident",
                "tips": "Use the STAR format"
            }
        ],
        "analysis": "Strong backend profile"
    }"#;

    const VALID_LEARNING_PATH: &str = r#"{
        "summary": "Solid fundamentals, needs distributed systems depth",
        "learningSteps": [
            {
                "step": "Learn async Rust",
                "description": "Work through tokio fundamentals",
                "priority": "high",
                "resources": "The tokio tutorial"
            }
        ],
        "estimatedDuration": "3 months"
    }"#;

    // ------------------------------------------------------------------
    // Structural checks
    // ------------------------------------------------------------------

    #[test]
    fn test_empty_response_fails() {
        assert!(matches!(
            parse_interview_questions(""),
            Err(ParseError::Empty)
        ));
        assert!(matches!(
            parse_interview_questions("   \n\t  "),
            Err(ParseError::Empty)
        ));
    }

    #[test]
    fn test_non_json_response_fails() {
        assert!(matches!(
            parse_interview_questions("Sure! Here are your questions:"),
            Err(ParseError::NotJson)
        ));
        // Leading prose before the object is rejected outright
        assert!(matches!(
            parse_interview_questions(&format!("Here you go: {}", VALID_QUESTIONS)),
            Err(ParseError::NotJson)
        ));
        // Array at the top level is not an object
        assert!(matches!(
            parse_interview_questions(r#"[{"question": "q"}]"#),
            Err(ParseError::NotJson)
        ));
    }

    #[test]
    fn test_unbalanced_braces_fail() {
        // Truncated mid-array but still ending in a brace
        let truncated = r#"{"questions":[{"question":"q","category":"tech"}"#;
        let open = truncated.matches('{').count();
        let close = truncated.matches('}').count();
        assert_ne!(open, close);
        assert!(matches!(
            parse_interview_questions(truncated),
            Err(ParseError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_braces_inside_strings_count_toward_balance() {
        // The heuristic counts every brace, including ones in string values,
        // so an otherwise valid document can be rejected.
        let response = r#"{"questions":[{"question":"what does { mean"}],"analysis":""}"#;
        assert!(matches!(
            parse_interview_questions(response),
            Err(ParseError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_response_over_length_ceiling_fails() {
        let pad = "a".repeat(3200);
        let response = format!(
            r#"{{"questions":[{{"question":"{}"}}],"analysis":""}}"#,
            pad
        );
        match parse_interview_questions(&response) {
            Err(ParseError::TooLong(len)) => assert!(len > MAX_RESPONSE_CHARS),
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_response_at_exactly_the_ceiling_passes() {
        let skeleton = |pad: &str| {
            format!(
                r#"{{"questions":[{{"question":"{}"}}],"analysis":"ok"}}"#,
                pad
            )
        };
        let overhead = skeleton("").chars().count();
        let response = skeleton(&"a".repeat(MAX_RESPONSE_CHARS - overhead));
        assert_eq!(response.chars().count(), MAX_RESPONSE_CHARS);
        assert!(parse_interview_questions(&response).is_ok());
    }

    #[test]
    fn test_balanced_but_invalid_json_fails_as_malformed() {
        // Balanced braces and correct brackets, but not decodable
        assert!(matches!(
            parse_interview_questions(r#"{"questions": }"#),
            Err(ParseError::Malformed(_))
        ));
    }

    // ------------------------------------------------------------------
    // Tolerant extraction
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_questions_parse_fully() {
        let result = parse_interview_questions(VALID_QUESTIONS).unwrap();
        assert_eq!(result.questions.len(), 1);
        let q = &result.questions[0];
        assert_eq!(q.question, "Describe a production incident you resolved");
        assert_eq!(q.category, "problem solving");
        assert_eq!(q.difficulty, "intermediate");
        assert_eq!(q.expected_answer, "A structured walkthrough of the incident");
        assert_eq!(q.tips, "Use the STAR format");
        assert_eq!(result.analysis, "Strong backend profile");
    }

    #[test]
    fn test_missing_question_fields_get_sentinel() {
        let response = r#"{"questions":[{"question":"Q1","category":"tech"}],"analysis":"ok"}"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.questions.len(), 1);
        let q = &result.questions[0];
        assert_eq!(q.question, "Q1");
        assert_eq!(q.category, "tech");
        assert_eq!(q.difficulty, MISSING_FIELD_SENTINEL);
        assert_eq!(q.expected_answer, MISSING_FIELD_SENTINEL);
        assert_eq!(q.tips, MISSING_FIELD_SENTINEL);
        assert_eq!(result.analysis, "ok");
    }

    #[test]
    fn test_null_fields_get_sentinel() {
        let response = r#"{"questions":[{"question":"Q1","tips":null}],"analysis":""}"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.questions[0].tips, MISSING_FIELD_SENTINEL);
    }

    #[test]
    fn test_empty_questions_array_fails_with_no_items() {
        assert!(matches!(
            parse_interview_questions(r#"{"questions":[],"analysis":"x"}"#),
            Err(ParseError::NoItems)
        ));
    }

    #[test]
    fn test_missing_questions_field_fails_with_no_items() {
        assert!(matches!(
            parse_interview_questions(r#"{"analysis":"x"}"#),
            Err(ParseError::NoItems)
        ));
    }

    #[test]
    fn test_questions_field_of_wrong_type_fails_with_no_items() {
        assert!(matches!(
            parse_interview_questions(r#"{"questions":"none","analysis":"x"}"#),
            Err(ParseError::NoItems)
        ));
    }

    #[test]
    fn test_malformed_element_is_skipped_not_fatal() {
        let response = r#"{
            "questions": [
                {"question": "good one", "category": "tech"},
                "just a string, not an object"
            ],
            "analysis": "partial"
        }"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].question, "good one");
    }

    #[test]
    fn test_all_elements_malformed_fails_with_no_items() {
        let response = r#"{"questions":["a","b"],"analysis":"x"}"#;
        assert!(matches!(
            parse_interview_questions(response),
            Err(ParseError::NoItems)
        ));
    }

    #[test]
    fn test_missing_analysis_defaults_to_empty() {
        let response = r#"{"questions":[{"question":"Q1"}]}"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.analysis, "");
    }

    // ------------------------------------------------------------------
    // Learning path
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_learning_path_parses_fully() {
        let result = parse_learning_path(VALID_LEARNING_PATH).unwrap();
        assert_eq!(result.learning_steps.len(), 1);
        let step = &result.learning_steps[0];
        assert_eq!(step.step, "Learn async Rust");
        assert_eq!(step.priority, "high");
        assert_eq!(result.summary, "Solid fundamentals, needs distributed systems depth");
        assert_eq!(result.estimated_duration, "3 months");
    }

    #[test]
    fn test_learning_path_missing_fields_get_sentinel() {
        let response = r#"{"learningSteps":[{"step":"S1"}]}"#;
        let result = parse_learning_path(response).unwrap();
        let step = &result.learning_steps[0];
        assert_eq!(step.step, "S1");
        assert_eq!(step.description, MISSING_FIELD_SENTINEL);
        assert_eq!(step.priority, MISSING_FIELD_SENTINEL);
        assert_eq!(step.resources, MISSING_FIELD_SENTINEL);
        assert_eq!(result.summary, "");
        assert_eq!(result.estimated_duration, "");
    }

    #[test]
    fn test_empty_learning_steps_fails_with_no_items() {
        assert!(matches!(
            parse_learning_path(r#"{"summary":"s","learningSteps":[],"estimatedDuration":"d"}"#),
            Err(ParseError::NoItems)
        ));
    }

    #[test]
    fn test_learning_path_skips_malformed_step() {
        let response = r#"{"learningSteps":[42,{"step":"real step"}],"summary":"s"}"#;
        let result = parse_learning_path(response).unwrap();
        assert_eq!(result.learning_steps.len(), 1);
        assert_eq!(result.learning_steps[0].step, "real step");
    }

    #[test]
    fn test_non_string_scalar_fields_use_text_form() {
        let response = r#"{"questions":[{"question":"Q1","difficulty":3}],"analysis":""}"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.questions[0].difficulty, "3");
    }

    #[test]
    fn test_container_valued_fields_render_as_empty_text() {
        let response =
            r#"{"questions":[{"question":"Q1","tips":["a","b"]}],"analysis":{"depth":"high"}}"#;
        let result = parse_interview_questions(response).unwrap();
        assert_eq!(result.questions[0].tips, "");
        assert_eq!(result.analysis, "");
    }
}
