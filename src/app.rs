use std::time::Instant;

use rand::thread_rng;

use crate::data::QuestionBank;
use crate::models::AnswerType;
use crate::session::{Session, SessionConfig, SessionStatus};

/// Application state: the question bank, the live session, and the
/// input state the session itself does not care about (option cursor,
/// numeric entry buffer).
pub struct App {
    bank: QuestionBank,
    config: SessionConfig,
    session: Session,
    cursor: usize,
    numeric_input: String,
    last_seen_index: usize,
}

impl App {
    /// Start the first session immediately. The bank is in memory, so
    /// the fetch resolves in the same call and the loading status is
    /// only ever observed by embedders that drive sessions manually.
    pub fn new(bank: QuestionBank, config: SessionConfig) -> Self {
        let mut app = Self {
            bank,
            config,
            session: Session::new(SessionConfig::default()),
            cursor: 0,
            numeric_input: String::new(),
            last_seen_index: 0,
        };
        app.start_session();
        app
    }

    /// Discard the current session and fetch a fresh draw.
    pub fn start_session(&mut self) {
        let mut session = Session::new(self.config.clone());
        let outcome = self
            .bank
            .session_questions(self.config.question_count, &mut thread_rng());
        session.load(outcome, Instant::now());
        if self.session.is_muted() {
            session.toggle_mute();
        }
        self.session = session;
        self.cursor = 0;
        self.numeric_input.clear();
        self.last_seen_index = 0;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn numeric_input(&self) -> &str {
        &self.numeric_input
    }

    /// Drive session time, then reset the input state whenever the
    /// session has moved on to a new question underneath us.
    pub fn on_clock(&mut self, now: Instant) {
        self.session.on_clock(now);
        if self.session.current_index() != self.last_seen_index {
            self.last_seen_index = self.session.current_index();
            self.cursor = 0;
            self.numeric_input.clear();
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(n) = self.option_count() {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(n) = self.option_count() {
            self.cursor = (self.cursor + n - 1) % n;
        }
    }

    pub fn push_numeric(&mut self, c: char) {
        if self.accepts_numeric_input() && self.numeric_input.len() < 12 {
            self.numeric_input.push(c);
        }
    }

    pub fn pop_numeric(&mut self) {
        if self.accepts_numeric_input() {
            self.numeric_input.pop();
        }
    }

    /// Submit whatever the input state currently points at: the
    /// highlighted option for a choice question, the typed buffer for a
    /// numeric one. The session ignores this outside the active status.
    pub fn submit_answer(&mut self) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let value = match question.answer_type {
            AnswerType::Text => match question.options.get(self.cursor) {
                Some(option) => option.clone(),
                None => return,
            },
            AnswerType::Numeric => {
                if self.numeric_input.is_empty() {
                    return;
                }
                self.numeric_input.clone()
            }
        };
        self.session.submit_answer(&value, Instant::now());
    }

    pub fn toggle_mute(&mut self) {
        self.session.toggle_mute();
    }

    /// Restart is only honored from the terminal statuses.
    pub fn restart(&mut self) {
        if self.session.can_restart() {
            self.start_session();
        }
    }

    fn option_count(&self) -> Option<usize> {
        let question = self.session.current_question()?;
        if self.session.status() != SessionStatus::Active
            || question.answer_type != AnswerType::Text
            || question.options.is_empty()
        {
            return None;
        }
        Some(question.options.len())
    }

    fn accepts_numeric_input(&self) -> bool {
        self.session.status() == SessionStatus::Active
            && self
                .session
                .current_question()
                .is_some_and(|q| q.answer_type == AnswerType::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::Question;

    fn text_bank(n: usize) -> QuestionBank {
        let questions = (0..n)
            .map(|i| Question {
                id: format!("q{i}"),
                text: format!("Question {i}?"),
                answer_type: AnswerType::Text,
                options: vec![format!("right{i}"), "wrong-a".into(), "wrong-b".into()],
                correct_answer: format!("right{i}"),
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn numeric_bank(n: usize) -> QuestionBank {
        let questions = (0..n)
            .map(|i| Question {
                id: format!("n{i}"),
                text: format!("What is {i} + 0?"),
                answer_type: AnswerType::Numeric,
                options: Vec::new(),
                correct_answer: format!("{i}"),
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn config(count: usize) -> SessionConfig {
        SessionConfig {
            question_count: count,
            ..SessionConfig::default()
        }
    }

    /// Move the cursor onto the correct option (draws shuffle them) and
    /// submit it.
    fn answer_correctly(app: &mut App) {
        let question = app.session().current_question().unwrap();
        let correct = question.correct_answer.clone();
        while app.session().current_question().unwrap().options[app.cursor()] != correct {
            app.select_next_option();
        }
        app.submit_answer();
    }

    /// Push session time far enough past the feedback deadline to
    /// trigger the auto-advance.
    fn ride_out_feedback(app: &mut App, offset: &mut Duration) {
        *offset += Duration::from_secs(2);
        app.on_clock(Instant::now() + *offset);
    }

    #[test]
    fn restart_from_complete_builds_a_fresh_zeroed_session() {
        let mut app = App::new(text_bank(4), config(2));
        app.toggle_mute();
        let mut offset = Duration::ZERO;

        answer_correctly(&mut app);
        ride_out_feedback(&mut app, &mut offset);
        answer_correctly(&mut app);
        ride_out_feedback(&mut app, &mut offset);

        assert_eq!(app.session().status(), SessionStatus::Complete);
        assert_eq!(app.session().correct_count(), 2);
        assert!(app.session().final_score().is_some());

        app.restart();
        let session = app.session();
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.final_score(), None);
        assert_eq!(session.remaining_seconds(), 120);
        assert_eq!(app.cursor(), 0);
        // Mute is presentation state and survives the new session.
        assert!(session.is_muted());
    }

    #[test]
    fn restart_is_ignored_while_a_session_is_running() {
        let mut app = App::new(text_bank(4), config(2));
        answer_correctly(&mut app);
        assert_eq!(app.session().status(), SessionStatus::Feedback);

        // A fresh session would be Active with a zeroed count.
        app.restart();
        assert_eq!(app.session().status(), SessionStatus::Feedback);
        assert_eq!(app.session().correct_count(), 1);
    }

    #[test]
    fn insufficient_bank_lands_in_empty_and_restart_retries() {
        let mut app = App::new(text_bank(3), config(10));
        assert_eq!(app.session().status(), SessionStatus::Empty);
        assert!(app.session().can_restart());

        // The bank has not grown, so the retry draws short again, but
        // the restart itself is honored.
        app.restart();
        assert_eq!(app.session().status(), SessionStatus::Empty);
        assert!(app.session().can_restart());
    }

    #[test]
    fn advancing_resets_the_option_cursor() {
        let mut app = App::new(text_bank(4), config(2));
        let mut offset = Duration::ZERO;

        app.select_next_option();
        assert_eq!(app.cursor(), 1);
        app.submit_answer();
        ride_out_feedback(&mut app, &mut offset);

        assert_eq!(app.session().current_index(), 1);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn advancing_clears_the_numeric_buffer() {
        let mut app = App::new(numeric_bank(3), config(2));
        let mut offset = Duration::ZERO;

        app.push_numeric('4');
        app.push_numeric('2');
        assert_eq!(app.numeric_input(), "42");
        app.submit_answer();
        ride_out_feedback(&mut app, &mut offset);

        assert_eq!(app.session().current_index(), 1);
        assert_eq!(app.numeric_input(), "");
    }
}
