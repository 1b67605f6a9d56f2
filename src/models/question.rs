use serde::Deserialize;

/// How a question expects its answer to be entered.
///
/// The session core only stores the discriminant; it decides whether the
/// UI shows multiple-choice options or a numeric input line, and which
/// comparison rule [`Question::accepts`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    Text,
    Numeric,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub answer_type: AnswerType,
    /// Candidate answers for `Text` questions: the correct answer plus
    /// distractors. Empty for `Numeric` questions (free-form input).
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    /// Whether a submitted value counts as correct for this question.
    ///
    /// `Text` answers compare by exact string equality. `Numeric` answers
    /// are parsed as `f64` after trimming and compared numerically, so
    /// "7", " 7 " and "7.0" all match a correct answer of "7"; if either
    /// side fails to parse, the comparison falls back to exact trimmed
    /// string equality.
    pub fn accepts(&self, submitted: &str) -> bool {
        match self.answer_type {
            AnswerType::Text => submitted == self.correct_answer,
            AnswerType::Numeric => {
                let submitted = submitted.trim();
                let correct = self.correct_answer.trim();
                match (submitted.parse::<f64>(), correct.parse::<f64>()) {
                    (Ok(a), Ok(b)) => a == b,
                    _ => submitted == correct,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(correct: &str) -> Question {
        Question {
            id: "n1".into(),
            text: "What is 3 + 4?".into(),
            answer_type: AnswerType::Numeric,
            options: Vec::new(),
            correct_answer: correct.into(),
        }
    }

    fn text(correct: &str, options: &[&str]) -> Question {
        Question {
            id: "t1".into(),
            text: "Capital of France?".into(),
            answer_type: AnswerType::Text,
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.into(),
        }
    }

    #[test]
    fn text_answers_compare_exactly() {
        let q = text("Paris", &["Paris", "London", "Berlin"]);
        assert!(q.accepts("Paris"));
        assert!(!q.accepts("paris"));
        assert!(!q.accepts("Paris "));
    }

    #[test]
    fn numeric_answers_compare_as_numbers() {
        let q = numeric("7");
        assert!(q.accepts("7"));
        assert!(q.accepts(" 7 "));
        assert!(q.accepts("7.0"));
        assert!(!q.accepts("8"));
    }

    #[test]
    fn malformed_numeric_input_falls_back_to_string_equality() {
        let q = numeric("7");
        assert!(!q.accepts("seven"));
        assert!(!q.accepts(""));

        // A non-numeric correct answer can still be matched literally.
        let q = numeric("n/a");
        assert!(q.accepts("n/a"));
        assert!(!q.accepts("7"));
    }

    #[test]
    fn answer_type_deserializes_lowercase() {
        let json = r#"{
            "id": "q1",
            "text": "How many days are in a week?",
            "answer_type": "numeric",
            "correct_answer": "7"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.answer_type, AnswerType::Numeric);
        assert!(q.options.is_empty());
    }
}
