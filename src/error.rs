use std::io;

use thiserror::Error;

use crate::data::LoadError;
use crate::persistence::PersistError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A quiz needs at least one question to have a valid cursor.
    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("failed to persist quiz state: {0}")]
    Persist(#[from] PersistError),

    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
