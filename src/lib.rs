//! # hangman-engine
//!
//! The rules engine for single-player hangman: a hidden word is revealed
//! letter by letter as the player guesses, a miss budget counts down, and the
//! session terminates in a won or lost state.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No I/O, no rendering, no persistence. The crate is the
//!    state machine; callers decide how to present it.
//!
//! 2. **Deterministic by Seed**: The only randomness is word selection at
//!    session start, driven by an explicit [`GameRng`] seed. Same seed, same
//!    word, same game.
//!
//! 3. **Terminal States Are Data**: Every accepted guess returns a
//!    [`GuessOutcome`] tagging the attempt with `Active`/`Won`/`Lost`. Win
//!    and loss are ordinary return values, not error control flow; only a
//!    guess submitted *after* the end fails.
//!
//! ## Example
//!
//! ```
//! use hangman_engine::{GameSession, GameStatus};
//!
//! let mut game = GameSession::builder()
//!     .answer("python")
//!     .max_misses(5)
//!     .build(42)
//!     .unwrap();
//!
//! let outcome = game.guess("p").unwrap();
//! assert!(outcome.attempt.is_hit());
//! assert_eq!(game.masked(), "p*****");
//! assert_eq!(outcome.status, GameStatus::Active);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG and the error taxonomy
//! - `game`: attempt records, the masked word, and the session state machine

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameRng, HangmanError};

pub use crate::game::{
    GameSession, GameSessionBuilder, GameStatus, GuessAttempt, GuessOutcome, MaskedWord,
    DEFAULT_MAX_MISSES, DEFAULT_WORDS, MASK_PLACEHOLDER,
};
