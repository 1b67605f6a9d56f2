mod question;

pub use question::{AnswerType, Question};
