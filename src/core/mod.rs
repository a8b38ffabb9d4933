//! Core engine support: random number generation and the error taxonomy.
//!
//! Everything here is game-shape-agnostic; the hangman rules themselves live
//! in [`crate::game`].

pub mod error;
pub mod rng;

pub use error::HangmanError;
pub use rng::GameRng;
