//! Randomized question selection over the static bank.
//!
//! The bank itself is immutable; every session draw is an independent
//! Fisher-Yates permutation, so repeated calls (restarts) produce fresh
//! orders without mutating shared state.

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::data::loader::{self, LoadError};
use crate::models::{AnswerType, Question};

#[derive(Debug, Error)]
pub enum SourceError {
    /// The bank holds fewer questions than the session asked for.
    /// Surfaced to the user as a "no questions available" screen,
    /// distinct from a fetch failure.
    #[error("bank has {available} questions, session needs {requested}")]
    InsufficientQuestions { available: usize, requested: usize },

    /// The bank could not be produced at all.
    #[error("failed to fetch questions: {0}")]
    Fetch(#[from] LoadError),
}

/// The static in-memory question bank a session draws from.
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Bank compiled into the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Ok(Self {
            questions: loader::load_builtin_questions()?,
        })
    }

    /// Bank loaded from a user-supplied JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self {
            questions: loader::load_questions_from_json(path)?,
        })
    }

    /// Bank built from questions the embedder already holds. The same
    /// invariants apply as for a loaded file.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        loader::validate(&questions)?;
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw the question list for one session: `count` distinct questions
    /// in a fresh random order, with each text question's options shuffled
    /// as well. The rng is injected so tests can seed it.
    pub fn session_questions<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Question>, SourceError> {
        if self.questions.len() < count {
            return Err(SourceError::InsufficientQuestions {
                available: self.questions.len(),
                requested: count,
            });
        }

        let mut shuffled = self.questions.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);

        for question in &mut shuffled {
            if question.answer_type == AnswerType::Text {
                question.options.shuffle(rng);
            }
        }

        Ok(shuffled)
    }
}
