//! # daily-quiz
//!
//! A timed quiz for the terminal. Each session draws a random set of
//! questions from a static bank, runs a countdown, scores answers with
//! time and perfection bonuses, and shows a final breakdown.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daily_quiz::{Quiz, QuizError, SessionConfig};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Play the built-in question bank with default settings.
//!     let quiz = Quiz::builtin(SessionConfig::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```
//!
//! The session state machine in [`session`] is usable on its own for
//! embedders that bring their own front end; [`Quiz`] only wires it to
//! a ratatui terminal.

mod app;
mod data;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{LoadError, QuestionBank, SourceError};
pub use models::{AnswerType, Question};
pub use session::{FinalScore, Session, SessionConfig, SessionStatus};

/// How often the event loop wakes up to drive the countdown when no key
/// is pressed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank could not be loaded at startup.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over the question bank compiled into the binary.
    pub fn builtin(config: SessionConfig) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(QuestionBank::builtin()?, config),
        })
    }

    /// Create a quiz from a JSON question file.
    pub fn from_json<P: AsRef<Path>>(path: P, config: SessionConfig) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(QuestionBank::from_json(path)?, config),
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, runs sessions until the user quits,
    /// then restores it.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        app.on_clock(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit. Keys that make no sense in the
/// current status fall through to the session, which ignores them.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mute();
            return false;
        }
        _ => {}
    }

    match app.session().status() {
        SessionStatus::Active => handle_quiz_input(app, key),
        SessionStatus::Complete | SessionStatus::Empty | SessionStatus::Error => {
            if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
                app.restart();
            }
        }
        // Loading accepts no input; feedback swallows keys until it
        // advances on its own.
        SessionStatus::Loading | SessionStatus::Feedback => {}
    }

    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter => app.submit_answer(),
        KeyCode::Backspace => app.pop_numeric(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            app.push_numeric(c);
        }
        _ => {}
    }
}
