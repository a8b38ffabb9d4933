//! Error taxonomy for the hangman engine.
//!
//! Every failure is immediate and surfaced to the caller as-is; the engine
//! never retries. The caller decides whether to report, abort, or start a
//! fresh session.

/// Errors surfaced by session construction and guess evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HangmanError {
    /// A guess attempt was constructed as both a hit and a miss.
    ///
    /// Cannot be reached through the public guessing API; seeing this means
    /// an internal bug.
    #[error("guess attempt cannot be both a hit and a miss")]
    InvalidAttempt,

    /// The secret word was empty.
    #[error("guess word cannot be empty")]
    InvalidWord,

    /// A guess was not exactly one character after lowercase folding.
    #[error("guesses must be a single character, got {0:?}")]
    InvalidGuessedLetter(String),

    /// An explicitly supplied word list had no entries to select from.
    #[error("word list has no words to select from")]
    InvalidWordList,

    /// A guess was submitted after the session reached a terminal state.
    #[error("game already completed")]
    GameFinished,
}
