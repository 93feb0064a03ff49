use uuid::Uuid;

use super::dictionary::Dictionary;
use super::evaluate::{
    evaluate, mark_correct_letters, normalize_guess, score_feedback, LetterFeedback,
    MSG_BAD_FORMAT, MSG_NOT_A_WORD, MSG_SOLVED,
};
use super::game::{Game, GameStatus};
use super::rules::LAST_ROW;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

use LetterFeedback::{Absent, Correct, Present};

fn dict() -> Dictionary {
    Dictionary::new(["apple", "again", "alarm", "crane", "slate", "llama", "label", "hello"])
        .unwrap()
}

fn letters(word: &str) -> [char; 5] {
    normalize_guess(word).unwrap()
}

#[test]
fn solving_guess_marks_solved_and_keeps_row() {
    let mut game = Game::new(Uuid::new_v4(), "apple");
    let outcome = evaluate(&mut game, &dict(), "apple").unwrap();

    assert_eq!(outcome.message, MSG_SOLVED);
    assert_eq!(outcome.status, GameStatus::Solved);
    assert!(game.solved());
    assert_eq!(game.current_row, 0);
    assert_eq!(outcome.correct_letters_strings(), vec!["a", "p", "p", "l", "e"]);
    assert_eq!(outcome.feedback, [Correct; 5]);
    assert!(game.grid.is_row_filled(0));
}

#[test]
fn uppercase_guess_is_normalized() {
    let mut game = Game::new(Uuid::new_v4(), "apple");
    let outcome = evaluate(&mut game, &dict(), "APPLE").unwrap();
    assert_eq!(outcome.guess, "apple");
    assert!(game.solved());
    assert_eq!(game.grid.row(0).unwrap()[0], Some('a'));
}

#[test]
fn miss_advances_row_and_lists_matches() {
    let mut game = Game::new(Uuid::new_v4(), "alarm");
    let outcome = evaluate(&mut game, &dict(), "again").unwrap();

    assert_eq!(game.current_row, 1);
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(outcome.correct_letters_strings(), vec!["a", "_", "a", "_", "_"]);
    assert_eq!(outcome.message, "Keep trying! Correct letters: a _ a _ _");
}

#[test]
fn miss_without_matches_says_keep_trying() {
    let mut game = Game::new(Uuid::new_v4(), "crane");
    let outcome = evaluate(&mut game, &dict(), "hello").unwrap();
    assert_eq!(outcome.message, "Keep trying!");
    assert_eq!(outcome.correct_letters, [None; 5]);
}

#[test]
fn miss_on_last_row_exhausts_and_reveals_solution() {
    let mut game = Game::new(Uuid::new_v4(), "crane");
    for expected_row in 1..=LAST_ROW {
        evaluate(&mut game, &dict(), "slate").unwrap();
        assert_eq!(game.current_row, expected_row);
    }
    let outcome = evaluate(&mut game, &dict(), "hello").unwrap();

    assert_eq!(outcome.status, GameStatus::Exhausted);
    assert_eq!(outcome.message, "Game over. The word was crane.");
    assert_eq!(game.current_row, LAST_ROW);
    assert!(!game.solved());
    assert!(game.grid.is_row_filled(usize::from(LAST_ROW)));
}

#[test]
fn solving_on_last_row_wins() {
    let mut game = Game::new(Uuid::new_v4(), "crane");
    for _ in 0..LAST_ROW {
        evaluate(&mut game, &dict(), "slate").unwrap();
    }
    let outcome = evaluate(&mut game, &dict(), "crane").unwrap();
    assert_eq!(outcome.status, GameStatus::Solved);
    assert_eq!(game.current_row, LAST_ROW);
}

#[test]
fn bad_format_leaves_game_unchanged() {
    let mut game = Game::new(Uuid::new_v4(), "apple");
    let before = game.clone();
    for raw in ["", "appl", "apples", "app1e", "ap le", "ápple"] {
        let err = evaluate(&mut game, &dict(), raw).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation(ValidationKind::InvalidGuess, MSG_BAD_FORMAT),
            "raw guess {raw:?}"
        );
        assert_eq!(game, before);
    }
}

#[test]
fn unknown_word_leaves_game_unchanged() {
    let mut game = Game::new(Uuid::new_v4(), "apple");
    let before = game.clone();
    let err = evaluate(&mut game, &dict(), "zzzzz").unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::WordNotInDictionary, MSG_NOT_A_WORD)
    );
    assert_eq!(game, before);
}

#[test]
fn finished_games_reject_guesses() {
    let mut solved = Game::new(Uuid::new_v4(), "apple");
    evaluate(&mut solved, &dict(), "apple").unwrap();
    let before = solved.clone();
    let err = evaluate(&mut solved, &dict(), "crane").unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameFinished, _)));
    assert_eq!(solved, before);

    let mut exhausted = Game::new(Uuid::new_v4(), "crane");
    for _ in 0..=LAST_ROW {
        evaluate(&mut exhausted, &dict(), "slate").unwrap();
    }
    assert_eq!(exhausted.status, GameStatus::Exhausted);
    let err = evaluate(&mut exhausted, &dict(), "crane").unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameFinished, _)));
}

#[test]
fn correct_letters_are_exact_position_only() {
    let marks = mark_correct_letters(&letters("again"), &letters("alarm"));
    assert_eq!(marks, [Some('a'), None, Some('a'), None, None]);
}

#[test]
fn feedback_handles_duplicate_letters() {
    // the exact match uses one 'l', leaving one copy for the next 'l'
    assert_eq!(
        score_feedback(&letters("llama"), &letters("label")),
        [Correct, Present, Present, Absent, Absent]
    );
    // both copies of the guessed letter are present when the solution has two
    assert_eq!(
        score_feedback(&letters("hello"), &letters("llama")),
        [Absent, Absent, Present, Present, Absent]
    );
    assert_eq!(
        score_feedback(&letters("again"), &letters("alarm")),
        [Correct, Absent, Correct, Absent, Absent]
    );
    assert_eq!(
        score_feedback(&letters("slate"), &letters("crane")),
        [Absent, Absent, Correct, Absent, Correct]
    );
}

#[test]
fn uppercase_solution_is_reported_lowercase() {
    let mut game = Game::new(Uuid::new_v4(), "CRANE");
    for _ in 0..LAST_ROW {
        evaluate(&mut game, &dict(), "slate").unwrap();
    }
    let outcome = evaluate(&mut game, &dict(), "hello").unwrap();
    assert_eq!(outcome.message, "Game over. The word was crane.");

    let mut game = Game::new(Uuid::new_v4(), "CRANE");
    assert!(evaluate(&mut game, &dict(), "crane").unwrap().status == GameStatus::Solved);
}
