//! Property tests for the engine invariants.
//!
//! - The mask always has the same character length as the answer
//! - Revealed positions are never re-masked (reveal is monotonic)
//! - `is_won` and `is_lost` are mutually exclusive, and their definitions
//!   hold for every reachable state
//! - Nothing mutates once a session is terminal

use proptest::prelude::*;

use hangman_engine::{GameSession, HangmanError, MaskedWord, MASK_PLACEHOLDER};

fn answers() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn guesses() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..30)
}

/// Positions currently revealed in a mask.
fn revealed_positions(mask: &str) -> Vec<usize> {
    mask.chars()
        .enumerate()
        .filter(|(_, c)| *c != MASK_PLACEHOLDER)
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn mask_length_always_matches_answer(answer in answers(), guesses in guesses()) {
        let mut word = MaskedWord::new(&answer).unwrap();
        prop_assert_eq!(word.mask().chars().count(), answer.chars().count());

        for letter in guesses {
            word.evaluate(&letter.to_string()).unwrap();
            prop_assert_eq!(word.mask().chars().count(), answer.chars().count());
        }
    }

    #[test]
    fn reveal_is_monotonic(answer in answers(), guesses in guesses()) {
        let mut word = MaskedWord::new(&answer).unwrap();

        for letter in guesses {
            let before = revealed_positions(word.mask());
            word.evaluate(&letter.to_string()).unwrap();
            let after = revealed_positions(word.mask());

            for position in &before {
                prop_assert!(
                    after.contains(position),
                    "position {} was re-masked", position
                );
            }
        }
    }

    #[test]
    fn hit_iff_letter_in_answer(answer in answers(), letter in prop::char::range('a', 'z')) {
        let mut word = MaskedWord::new(&answer).unwrap();
        let attempt = word.evaluate(&letter.to_string()).unwrap();
        prop_assert_eq!(attempt.is_hit(), answer.contains(letter));
        prop_assert_eq!(attempt.is_miss(), !answer.contains(letter));
    }

    #[test]
    fn won_lost_definitions_hold(
        answer in answers(),
        guesses in guesses(),
        max_misses in 1u32..8,
    ) {
        let mut game = GameSession::builder()
            .answer(&answer)
            .max_misses(max_misses)
            .build(0)
            .unwrap();

        for letter in guesses {
            let finished = game.is_finished();
            let result = game.guess(&letter.to_string());
            if finished {
                prop_assert_eq!(result, Err(HangmanError::GameFinished));
            } else {
                result.unwrap();
            }

            let won = game.masked() == game.word().answer();
            let lost = !won && game.remaining_misses() == 0;
            prop_assert_eq!(game.is_won(), won);
            prop_assert_eq!(game.is_lost(), lost);
            prop_assert!(!(game.is_won() && game.is_lost()));
            prop_assert_eq!(game.is_finished(), won || lost);
        }
    }

    #[test]
    fn terminal_sessions_never_mutate(
        answer in answers(),
        guesses in guesses(),
        extra in guesses(),
    ) {
        let mut game = GameSession::builder()
            .answer(&answer)
            .max_misses(2)
            .build(0)
            .unwrap();

        for letter in guesses {
            if game.is_finished() {
                break;
            }
            game.guess(&letter.to_string()).unwrap();
        }

        if game.is_finished() {
            let snapshot = game.clone();
            for letter in extra {
                prop_assert_eq!(
                    game.guess(&letter.to_string()),
                    Err(HangmanError::GameFinished)
                );
            }
            prop_assert_eq!(game, snapshot);
        }
    }

    #[test]
    fn history_has_no_duplicates(answer in answers(), guesses in guesses()) {
        let mut game = GameSession::builder()
            .answer(&answer)
            .max_misses(5)
            .build(0)
            .unwrap();

        for letter in guesses {
            if game.is_finished() {
                break;
            }
            game.guess(&letter.to_string()).unwrap();
        }

        let history = game.previous_guesses();
        for (i, letter) in history.iter().enumerate() {
            prop_assert!(!history[i + 1..].contains(letter));
        }
    }
}
