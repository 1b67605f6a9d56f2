//! Session state machine.
//!
//! One [`Session`] is one playthrough: it owns the drawn question list,
//! the score, the countdown, and the transition rules between statuses.
//! All timing flows through [`Session::on_clock`], which the event loop
//! calls with the current instant; the countdown deadline and the
//! post-answer feedback deadline are plain fields on the session, so
//! dropping or replacing the session cancels every pending timer.
//!
//! Events that arrive in a status that does not accept them are silently
//! ignored. The UI forwards key presses without checking state first, so
//! a stray Enter during the loading or feedback phase must be a no-op
//! rather than an error.

mod score;

use std::time::{Duration, Instant};

use log::debug;

use crate::data::SourceError;
use crate::models::Question;

pub use score::FinalScore;

/// Tunable constants for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Questions per session.
    pub question_count: usize,
    /// Countdown duration in seconds.
    pub initial_seconds: u32,
    /// Points per correct answer.
    pub points_per_correct: u32,
    /// Per-question factor for the maximum time bonus.
    pub time_points_factor: u32,
    /// Time bonus lost per elapsed second.
    pub time_deduction_per_second: f64,
    /// Bonus for a perfect run that beats the clock.
    pub perfection_bonus: u32,
    /// How long the correct/incorrect highlight stays up before the
    /// session advances to the next question.
    pub feedback_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            initial_seconds: 120,
            points_per_correct: 10,
            time_points_factor: 5,
            time_deduction_per_second: 0.5,
            perfection_bonus: 50,
            feedback_delay: Duration::from_millis(1000),
        }
    }
}

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Question fetch in flight; no input accepted.
    Loading,
    /// Current question awaits an answer.
    Active,
    /// Post-answer highlight; advances automatically after the
    /// configured delay.
    Feedback,
    /// Finished, `final_score` fixed. Only restart is accepted.
    Complete,
    /// Fetch succeeded but the bank could not fill a session.
    /// Retryable, not an error.
    Empty,
    /// Fetch failed. Retryable.
    Error,
}

pub struct Session {
    config: SessionConfig,
    status: SessionStatus,
    questions: Vec<Question>,
    current_index: usize,
    correct_count: u32,
    remaining_seconds: u32,
    selected_answer: Option<String>,
    feedback_correct: Option<bool>,
    final_score: Option<FinalScore>,
    error_message: Option<String>,
    muted: bool,
    /// Next whole-second countdown deadline; None once finalized.
    next_tick_at: Option<Instant>,
    /// When the current feedback phase auto-advances; None outside
    /// `Feedback` and after finalization.
    feedback_until: Option<Instant>,
}

impl Session {
    /// A fresh session in `Loading`, waiting for [`Session::load`].
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            status: SessionStatus::Loading,
            questions: Vec::new(),
            current_index: 0,
            correct_count: 0,
            remaining_seconds: 0,
            selected_answer: None,
            feedback_correct: None,
            final_score: None,
            error_message: None,
            muted: false,
            next_tick_at: None,
            feedback_until: None,
        }
    }

    /// Feed the question-fetch outcome into the session.
    ///
    /// Valid only in `Loading`; ignored otherwise. Starts the countdown
    /// on success.
    pub fn load(&mut self, outcome: Result<Vec<Question>, SourceError>, now: Instant) {
        if self.status != SessionStatus::Loading {
            return;
        }

        match outcome {
            Ok(questions) if !questions.is_empty() => {
                debug!("session started with {} questions", questions.len());
                self.questions = questions;
                self.remaining_seconds = self.config.initial_seconds;
                // A zero-second budget is already expired; never let the
                // session go live at 00:00.
                if self.remaining_seconds == 0 {
                    self.finalize(true);
                    return;
                }
                self.next_tick_at = Some(now + Duration::from_secs(1));
                self.status = SessionStatus::Active;
            }
            Ok(_) | Err(SourceError::InsufficientQuestions { .. }) => {
                debug!("session has no questions to show");
                self.status = SessionStatus::Empty;
            }
            Err(err) => {
                debug!("question fetch failed: {err}");
                self.error_message = Some(err.to_string());
                self.status = SessionStatus::Error;
            }
        }
    }

    /// Submit an answer for the current question.
    ///
    /// Valid only in `Active`; duplicate submissions while the feedback
    /// highlight is up, or any submission after completion, are no-ops.
    pub fn submit_answer(&mut self, value: &str, now: Instant) {
        if self.status != SessionStatus::Active {
            return;
        }

        let question = &self.questions[self.current_index];
        let correct = question.accepts(value);
        debug!(
            "answer for {} ({}/{}): {}",
            question.id,
            self.current_index + 1,
            self.questions.len(),
            if correct { "correct" } else { "incorrect" }
        );

        self.selected_answer = Some(value.to_string());
        self.feedback_correct = Some(correct);
        if correct {
            self.correct_count += 1;
        }
        self.feedback_until = Some(now + self.config.feedback_delay);
        self.status = SessionStatus::Feedback;
    }

    /// Advance session time. Called by the event loop on every poll
    /// iteration with the current instant.
    ///
    /// Countdown ticks are applied before the feedback deadline, so when
    /// the clock runs out in the same instant a feedback phase would
    /// advance, expiry finalizes the session first and the stale advance
    /// falls through the `Complete` guard.
    pub fn on_clock(&mut self, now: Instant) {
        while let Some(deadline) = self.next_tick_at {
            if now < deadline {
                break;
            }
            self.next_tick_at = Some(deadline + Duration::from_secs(1));
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            if self.remaining_seconds == 0 {
                debug!("time expired with {} correct", self.correct_count);
                self.finalize(true);
                break;
            }
        }

        if let Some(deadline) = self.feedback_until
            && now >= deadline
        {
            self.feedback_until = None;
            self.advance();
        }
    }

    /// Flip the mute flag. Accepted in any status; presentation only.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Leave feedback: next question, or finalize after the last one.
    fn advance(&mut self) {
        if self.status != SessionStatus::Feedback {
            return;
        }

        self.selected_answer = None;
        self.feedback_correct = None;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.status = SessionStatus::Active;
        } else {
            self.finalize(false);
        }
    }

    /// Fix the final score and stop every timer. Latched: a second call
    /// (stale feedback deadline, further ticks) changes nothing.
    fn finalize(&mut self, time_expired: bool) {
        if self.status == SessionStatus::Complete {
            return;
        }

        self.next_tick_at = None;
        self.feedback_until = None;
        self.final_score = Some(score::compute_final_score(
            self.correct_count,
            self.questions.len() as u32,
            self.remaining_seconds,
            time_expired,
            &self.config,
        ));
        self.status = SessionStatus::Complete;
    }

    // Read-only snapshot for the presentation layer.

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// `Some(is_correct)` while the feedback highlight is up.
    pub fn feedback_correct(&self) -> Option<bool> {
        self.feedback_correct
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn final_score(&self) -> Option<&FinalScore> {
        self.final_score.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a restart event is currently accepted.
    pub fn can_restart(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Complete | SessionStatus::Empty | SessionStatus::Error
        )
    }
}
