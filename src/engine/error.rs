use thiserror::Error;

/// Expected, user-facing failures of session operations
///
/// None of these mutate session state; callers branch on the variant and
/// decide how to present it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Game not found: {0}")]
    SessionNotFound(String),
    #[error("Game is already over")]
    GameAlreadyOver,
    #[error("Please enter a 5-letter word (got {0} letters)")]
    InvalidGuessLength(usize),
    #[error("Word not in the allowed list: {0}")]
    GuessNotInWordList(String),
    #[error("Word source is empty")]
    EmptyWordSource,
}
