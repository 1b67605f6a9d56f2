use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{AnswerType, Question};

/// The question bank compiled into the binary, used when no file is given.
const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but violates a bank invariant.
    #[error("invalid question bank: {0}")]
    Invalid(String),
}

pub fn load_builtin_questions() -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(BUILTIN_QUESTIONS)?;
    validate(&questions)?;
    Ok(questions)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let json_content = fs::read_to_string(path.as_ref())?;
    let questions: Vec<Question> = serde_json::from_str(&json_content)?;
    validate(&questions)?;
    Ok(questions)
}

/// Bank invariants: non-empty, unique ids, every question has a
/// correct answer, and text questions list it among their options.
pub(crate) fn validate(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Invalid(
            "bank must contain at least one question".into(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for question in questions {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(LoadError::Invalid(format!(
                "duplicate question id '{}'",
                question.id
            )));
        }

        if question.correct_answer.is_empty() {
            return Err(LoadError::Invalid(format!(
                "question '{}' has an empty correct answer",
                question.id
            )));
        }

        if question.answer_type == AnswerType::Text
            && !question.options.contains(&question.correct_answer)
        {
            return Err(LoadError::Invalid(format!(
                "question '{}' does not list its correct answer among its options",
                question.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_loads_and_validates() {
        let questions = load_builtin_questions().unwrap();
        assert!(questions.len() >= 10);
    }

    #[test]
    fn rejects_text_question_missing_its_answer() {
        let json = r#"[{
            "id": "q1",
            "text": "Capital of France?",
            "answer_type": "text",
            "options": ["London", "Berlin"],
            "correct_answer": "Paris"
        }]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert!(matches!(validate(&questions), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "q1", "text": "a", "answer_type": "numeric", "correct_answer": "1"},
            {"id": "q1", "text": "b", "answer_type": "numeric", "correct_answer": "2"}
        ]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert!(matches!(validate(&questions), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_correct_answer() {
        let json = r#"[{"id": "q1", "text": "a", "answer_type": "numeric", "correct_answer": ""}]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert!(matches!(validate(&questions), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(validate(&[]), Err(LoadError::Invalid(_))));
    }
}
