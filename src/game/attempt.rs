//! Guess attempt records.
//!
//! A [`GuessAttempt`] is the immutable outcome of evaluating one letter
//! against the answer: the folded letter plus a hit/miss flag pair of which
//! at most one may be set. The engine only ever builds attempts through the
//! [`GuessAttempt::hit`] and [`GuessAttempt::miss`] constructors; the
//! flag-pair constructor exists for callers reconstructing records from
//! external data.

use serde::{Deserialize, Serialize};

use crate::core::HangmanError;

/// Fold a letter to lowercase, keeping it a single `char`.
///
/// Multi-char expansions under Unicode lowercasing keep their first char;
/// guesses are folded at the string level before reaching here.
fn fold_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Immutable record of one guess evaluation.
///
/// Exactly one of the hit/miss flags may be set. A record with neither set is
/// representable through [`GuessAttempt::from_flags`] and answers `false` to
/// both queries; a record with both set is a construction error.
///
/// ## Example
///
/// ```
/// use hangman_engine::GuessAttempt;
///
/// let attempt = GuessAttempt::hit('P');
/// assert_eq!(attempt.letter(), 'p');
/// assert!(attempt.is_hit());
/// assert!(!attempt.is_miss());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessAttempt {
    letter: char,
    hit: bool,
    miss: bool,
}

impl GuessAttempt {
    /// Create an attempt from an explicit flag pair.
    ///
    /// Fails with [`HangmanError::InvalidAttempt`] when both flags are true.
    /// Both false is allowed: such a record reports neither hit nor miss.
    pub fn from_flags(letter: char, hit: bool, miss: bool) -> Result<Self, HangmanError> {
        if hit && miss {
            return Err(HangmanError::InvalidAttempt);
        }
        Ok(Self {
            letter: fold_letter(letter),
            hit,
            miss,
        })
    }

    /// Create a hit record for `letter`.
    #[must_use]
    pub fn hit(letter: char) -> Self {
        Self {
            letter: fold_letter(letter),
            hit: true,
            miss: false,
        }
    }

    /// Create a miss record for `letter`.
    #[must_use]
    pub fn miss(letter: char) -> Self {
        Self {
            letter: fold_letter(letter),
            hit: false,
            miss: true,
        }
    }

    /// The guessed letter, lowercase.
    #[must_use]
    pub fn letter(self) -> char {
        self.letter
    }

    /// True only if the hit flag was explicitly set.
    #[must_use]
    pub fn is_hit(self) -> bool {
        self.hit
    }

    /// True only if the miss flag was explicitly set.
    #[must_use]
    pub fn is_miss(self) -> bool {
        self.miss
    }
}
