use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use daily_quiz::{Quiz, SessionConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Questions per session
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Session duration in seconds
    #[arg(short, long, default_value_t = 120)]
    duration: u32,

    /// Feedback highlight duration in milliseconds
    #[arg(long, default_value_t = 1000)]
    feedback_ms: u64,
}

fn main() {
    let args = Args::parse();

    let config = SessionConfig {
        question_count: args.count,
        initial_seconds: args.duration,
        feedback_delay: Duration::from_millis(args.feedback_ms),
        ..SessionConfig::default()
    };

    let quiz = match args.questions {
        Some(path) => Quiz::from_json(path, config),
        None => Quiz::builtin(config),
    };

    let quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {e}");
        std::process::exit(1);
    }
}
