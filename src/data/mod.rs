mod loader;
mod source;

pub use loader::LoadError;
pub use source::{QuestionBank, SourceError};
