//! The masked word: secret answer plus reveal mask.
//!
//! ## Invariants
//!
//! - The mask always has the same character length as the answer.
//! - A revealed position is never re-masked: the mask is rebuilt on every
//!   hit, but the rebuild keeps any position that was already showing.

use serde::{Deserialize, Serialize};

use crate::core::HangmanError;
use crate::game::attempt::GuessAttempt;

/// Placeholder shown at unrevealed mask positions.
pub const MASK_PLACEHOLDER: char = '*';

/// The secret answer and its current reveal mask.
///
/// Created once per session from the selected word; mutated in place on every
/// hit; never reset.
///
/// ## Example
///
/// ```
/// use hangman_engine::MaskedWord;
///
/// let mut word = MaskedWord::new("Python").unwrap();
/// assert_eq!(word.mask(), "******");
///
/// let attempt = word.evaluate("y").unwrap();
/// assert!(attempt.is_hit());
/// assert_eq!(word.mask(), "*y****");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedWord {
    answer: String,
    mask: String,
}

impl MaskedWord {
    /// Construct from a non-empty word, folding it to lowercase.
    ///
    /// Fails with [`HangmanError::InvalidWord`] on empty input.
    pub fn new(word: &str) -> Result<Self, HangmanError> {
        if word.is_empty() {
            return Err(HangmanError::InvalidWord);
        }
        let answer = word.to_lowercase();
        let mask: String = answer.chars().map(|_| MASK_PLACEHOLDER).collect();
        Ok(Self { answer, mask })
    }

    /// Evaluate a single-letter guess against the answer.
    ///
    /// The guess is folded to lowercase and must be exactly one character;
    /// anything else fails with [`HangmanError::InvalidGuessedLetter`] and
    /// leaves the mask untouched.
    ///
    /// On a hit the mask is rebuilt position by position: a position shows
    /// its answer character if it matches the guessed letter or was already
    /// revealed, and stays hidden otherwise. On a miss the mask is unchanged.
    pub fn evaluate(&mut self, guess: &str) -> Result<GuessAttempt, HangmanError> {
        let letter = normalize_guess(guess)?;

        if !self.answer.contains(letter) {
            return Ok(GuessAttempt::miss(letter));
        }

        self.mask = self
            .answer
            .chars()
            .zip(self.mask.chars())
            .map(|(answer_char, mask_char)| {
                if answer_char == letter || answer_char == mask_char {
                    answer_char
                } else {
                    MASK_PLACEHOLDER
                }
            })
            .collect();

        Ok(GuessAttempt::hit(letter))
    }

    /// The secret answer, lowercase.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The current mask: revealed characters and placeholders.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// True once every position has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.answer == self.mask
    }
}

/// Fold a guess to lowercase and require exactly one character.
fn normalize_guess(guess: &str) -> Result<char, HangmanError> {
    let folded = guess.to_lowercase();
    let mut chars = folded.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(HangmanError::InvalidGuessedLetter(guess.to_string())),
    }
}
