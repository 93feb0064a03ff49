//! Property tests for guess evaluation (pure domain, no store).
//!
//! Games are driven to an arbitrary row by replaying misses, so every
//! generated state is reachable by construction.

use proptest::prelude::*;
use uuid::Uuid;

use crate::domain::dictionary::Dictionary;
use crate::domain::evaluate::{evaluate, normalize_guess, score_feedback, LetterFeedback};
use crate::domain::game::{Game, GameStatus};
use crate::domain::rules::LAST_ROW;
use crate::domain::test_prelude;
use crate::errors::domain::{DomainError, ValidationKind};

fn word_at(dict: &Dictionary, idx: usize) -> String {
    dict.words()[idx % dict.len()].clone()
}

/// Game with `rows` misses already recorded.
fn game_at_row(dict: &Dictionary, solution: &str, miss: &str, rows: u8) -> Game {
    let mut game = Game::new(Uuid::new_v4(), solution);
    for _ in 0..rows {
        evaluate(&mut game, dict, miss).expect("replayed miss must be accepted");
    }
    game
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: guessing the solution solves the game without moving the row.
    #[test]
    fn prop_solution_guess_solves(idx in 0usize..10_000, rows in 0u8..=LAST_ROW) {
        let dict = Dictionary::builtin();
        let solution = word_at(&dict, idx);
        let miss = word_at(&dict, idx + 1);
        let mut game = game_at_row(&dict, &solution, &miss, rows);

        let outcome = evaluate(&mut game, &dict, &solution.to_uppercase()).unwrap();

        prop_assert_eq!(outcome.status, GameStatus::Solved);
        prop_assert!(game.solved());
        prop_assert_eq!(game.current_row, rows);
        prop_assert!(outcome.feedback.iter().all(|f| *f == LetterFeedback::Correct));
    }

    /// Property: a miss before the last row advances exactly one row.
    #[test]
    fn prop_miss_advances_one_row(
        idx in 0usize..10_000,
        offset in 1usize..400,
        rows in 0u8..LAST_ROW,
    ) {
        let dict = Dictionary::builtin();
        let solution = word_at(&dict, idx);
        let miss = word_at(&dict, idx + offset);
        let mut game = game_at_row(&dict, &solution, &miss, rows);

        let outcome = evaluate(&mut game, &dict, &miss).unwrap();

        prop_assert_eq!(outcome.status, GameStatus::InProgress);
        prop_assert!(!game.solved());
        prop_assert_eq!(game.current_row, rows + 1);
    }

    /// Property: a miss on the last row exhausts the game and reveals the solution.
    #[test]
    fn prop_miss_on_last_row_exhausts(idx in 0usize..10_000) {
        let dict = Dictionary::builtin();
        let solution = word_at(&dict, idx);
        let miss = word_at(&dict, idx + 1);
        let mut game = game_at_row(&dict, &solution, &miss, LAST_ROW);

        let outcome = evaluate(&mut game, &dict, &miss).unwrap();

        prop_assert_eq!(outcome.status, GameStatus::Exhausted);
        prop_assert!(!game.solved());
        prop_assert_eq!(game.current_row, LAST_ROW);
        prop_assert!(outcome.message.contains(&solution));
    }

    /// Property: malformed guesses are rejected and leave the game untouched.
    #[test]
    fn prop_malformed_guess_rejected(
        raw in "[a-zA-Z]{0,4}|[a-zA-Z]{6,9}|[a-zA-Z]{0,4}[0-9 _\\-][a-zA-Z]{0,4}",
        rows in 0u8..=LAST_ROW,
    ) {
        let dict = Dictionary::builtin();
        let mut game = game_at_row(&dict, "apple", "crane", rows);
        let before = game.clone();

        let err = evaluate(&mut game, &dict, &raw).unwrap_err();

        prop_assert!(matches!(err, DomainError::Validation(ValidationKind::InvalidGuess, _)));
        prop_assert_eq!(game, before);
    }

    /// Property: well-formed words outside the dictionary are rejected.
    #[test]
    fn prop_unknown_word_rejected(raw in "[a-z]{5}") {
        let dict = Dictionary::new(["apple", "crane"]).unwrap();
        prop_assume!(!dict.contains(&raw));
        let mut game = Game::new(Uuid::new_v4(), "apple");
        let before = game.clone();

        let err = evaluate(&mut game, &dict, &raw).unwrap_err();

        prop_assert!(matches!(err, DomainError::Validation(ValidationKind::WordNotInDictionary, _)));
        prop_assert_eq!(game, before);
    }

    /// Property: feedback never credits a letter more often than the
    /// solution contains it, and `Correct` is exactly the positional match.
    #[test]
    fn prop_feedback_respects_letter_counts(guess in "[a-e]{5}", solution in "[a-e]{5}") {
        let g = normalize_guess(&guess).unwrap();
        let s = normalize_guess(&solution).unwrap();
        let feedback = score_feedback(&g, &s);

        for i in 0..5 {
            prop_assert_eq!(feedback[i] == LetterFeedback::Correct, g[i] == s[i]);
        }
        for letter in 'a'..='e' {
            let credited = (0..5)
                .filter(|&i| g[i] == letter && feedback[i] != LetterFeedback::Absent)
                .count();
            let available = s.iter().filter(|&&c| c == letter).count();
            let guessed = g.iter().filter(|&&c| c == letter).count();
            prop_assert_eq!(credited, available.min(guessed));
        }
    }
}
