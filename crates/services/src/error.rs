//! Shared error types for the services crate.

use thiserror::Error;

/// Calls the quiz rejects. The machine is left untouched whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("choice {index} is out of range (expected 0..3)")]
    InvalidChoice { index: usize },
    #[error("no question is waiting for a guess")]
    NotAwaitingGuess,
    #[error("no result is waiting to be acknowledged")]
    NotResolved,
    #[error("session has not ended")]
    NotEnded,
}
