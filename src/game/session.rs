//! The game session: turn sequencing, miss budget, and termination.
//!
//! ## State Machine
//!
//! A session is `Active` until either the whole answer is revealed (`Won`)
//! or the miss budget runs out (`Lost`). Both terminal states are final:
//! any further guess fails with [`HangmanError::GameFinished`] and mutates
//! nothing.
//!
//! Win and loss are reported as data, not as errors: every accepted guess
//! returns a [`GuessOutcome`] pairing the attempt record with the session
//! status after the guess.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, HangmanError};
use crate::game::attempt::GuessAttempt;
use crate::game::word::MaskedWord;

/// Built-in word list, used when no explicit list is supplied.
pub const DEFAULT_WORDS: &[&str] = &["rmotr", "python", "awesome"];

/// Default miss budget for new sessions.
pub const DEFAULT_MAX_MISSES: u32 = 5;

/// Session status after a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// More guesses are accepted.
    Active,
    /// The whole answer is revealed. Terminal.
    Won,
    /// The miss budget ran out before the answer was revealed. Terminal.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Result of one accepted guess: the attempt record plus the session status
/// it left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// The evaluated attempt (hit or miss).
    pub attempt: GuessAttempt,
    /// Session status after applying the attempt.
    pub status: GameStatus,
}

/// Select one word uniformly at random from `words`.
///
/// Fails with [`HangmanError::InvalidWordList`] when the list is empty.
pub fn select_random_word<'a, S: AsRef<str>>(
    words: &'a [S],
    rng: &mut GameRng,
) -> Result<&'a str, HangmanError> {
    rng.choose(words)
        .map(S::as_ref)
        .ok_or(HangmanError::InvalidWordList)
}

/// Builder for [`GameSession`].
///
/// ## Defaults
///
/// - Word source: [`DEFAULT_WORDS`]
/// - Miss budget: [`DEFAULT_MAX_MISSES`]
///
/// An explicitly supplied empty word list is an error at build time; leaving
/// the list unset selects from the built-in default words instead.
pub struct GameSessionBuilder {
    words: Option<Vec<String>>,
    max_misses: u32,
    answer: Option<String>,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            words: None,
            max_misses: DEFAULT_MAX_MISSES,
            answer: None,
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a custom word list to select the answer from.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set the miss budget.
    pub fn max_misses(mut self, max_misses: u32) -> Self {
        assert!(max_misses > 0, "Miss budget must be at least 1");
        self.max_misses = max_misses;
        self
    }

    /// Fix the answer directly, bypassing random selection.
    ///
    /// Intended for tests and replays that need a known word.
    pub fn answer(mut self, word: &str) -> Self {
        self.answer = Some(word.to_string());
        self
    }

    /// Build the session, selecting the answer with a fresh seeded RNG.
    pub fn build(self, seed: u64) -> Result<GameSession, HangmanError> {
        let mut rng = GameRng::new(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build the session, selecting the answer with a caller-owned RNG.
    pub fn build_with_rng(self, rng: &mut GameRng) -> Result<GameSession, HangmanError> {
        let Self {
            words,
            max_misses,
            answer,
        } = self;

        let answer = match (answer, words) {
            (Some(word), _) => word,
            (None, Some(words)) => select_random_word(&words, rng)?.to_string(),
            (None, None) => select_random_word(DEFAULT_WORDS, rng)?.to_string(),
        };

        Ok(GameSession {
            word: MaskedWord::new(&answer)?,
            remaining_misses: max_misses,
            previous_guesses: SmallVec::new(),
        })
    }
}

/// A single hangman session.
///
/// Owns the [`MaskedWord`], the misses-remaining counter, and the guess
/// history. Mutated once per accepted guess; effectively immutable once a
/// terminal state is reached.
///
/// ## Example
///
/// ```
/// use hangman_engine::{GameSession, GameStatus, HangmanError};
///
/// let mut game = GameSession::builder()
///     .answer("rmotr")
///     .max_misses(1)
///     .build(0)
///     .unwrap();
///
/// let outcome = game.guess("z").unwrap();
/// assert!(outcome.attempt.is_miss());
/// assert_eq!(outcome.status, GameStatus::Lost);
/// assert!(game.is_finished());
/// assert_eq!(game.guess("a"), Err(HangmanError::GameFinished));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    word: MaskedWord,
    remaining_misses: u32,
    /// Distinct guessed letters in insertion order.
    previous_guesses: SmallVec<[char; 8]>,
}

impl GameSession {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Create a default-configuration session with an entropy-seeded RNG:
    /// answer from [`DEFAULT_WORDS`], miss budget [`DEFAULT_MAX_MISSES`].
    pub fn new() -> Result<Self, HangmanError> {
        let mut rng = GameRng::from_entropy();
        GameSessionBuilder::new().build_with_rng(&mut rng)
    }

    /// Submit a single-letter guess.
    ///
    /// Fails with [`HangmanError::GameFinished`] once the session is
    /// terminal, and propagates [`HangmanError::InvalidGuessedLetter`] from
    /// evaluation; neither failure mutates any state. An accepted guess
    /// returns the attempt tagged with the resulting [`GameStatus`].
    ///
    /// Every accepted guess is re-evaluated in full: re-guessing a letter
    /// that already missed costs another miss, while re-guessing a revealed
    /// letter is a free hit. The history records each distinct letter once,
    /// in first-guessed order, either way.
    pub fn guess(&mut self, guess: &str) -> Result<GuessOutcome, HangmanError> {
        if self.is_finished() {
            return Err(HangmanError::GameFinished);
        }

        let attempt = self.word.evaluate(guess)?;

        if attempt.is_miss() {
            self.remaining_misses = self.remaining_misses.saturating_sub(1);
        }

        let letter = attempt.letter();
        if !self.previous_guesses.contains(&letter) {
            self.previous_guesses.push(letter);
        }

        Ok(GuessOutcome {
            attempt,
            status: self.status(),
        })
    }

    /// Current status, derived from the mask and the miss counter.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// True once the session is won or lost.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// True iff the mask equals the answer exactly.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word.is_revealed()
    }

    /// True iff the answer is not fully revealed and no misses remain.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.word.is_revealed() && self.remaining_misses == 0
    }

    /// Misses still allowed before the session is lost.
    #[must_use]
    pub fn remaining_misses(&self) -> u32 {
        self.remaining_misses
    }

    /// Distinct guessed letters in first-guessed order.
    #[must_use]
    pub fn previous_guesses(&self) -> &[char] {
        &self.previous_guesses
    }

    /// The current reveal mask.
    #[must_use]
    pub fn masked(&self) -> &str {
        self.word.mask()
    }

    /// The underlying masked word.
    #[must_use]
    pub fn word(&self) -> &MaskedWord {
        &self.word
    }
}
