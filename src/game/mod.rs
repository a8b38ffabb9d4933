//! The hangman rules: attempt records, the masked word, and the session.
//!
//! Dependency order is leaves-first:
//!
//! - [`GuessAttempt`]: immutable record of one guess outcome
//! - [`MaskedWord`]: owns the answer and the reveal mask, evaluates letters
//! - [`GameSession`]: owns a [`MaskedWord`] plus the miss counter and guess
//!   history, and sequences turns to a terminal state

pub mod attempt;
pub mod session;
pub mod word;

pub use attempt::GuessAttempt;
pub use session::{
    select_random_word, GameSession, GameSessionBuilder, GameStatus, GuessOutcome,
    DEFAULT_MAX_MISSES, DEFAULT_WORDS,
};
pub use word::{MaskedWord, MASK_PLACEHOLDER};
