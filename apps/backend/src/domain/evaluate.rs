//! Guess evaluation: the single state transition of a game.

use serde::{Deserialize, Serialize};

use super::dictionary::Dictionary;
use super::game::{Game, GameStatus};
use super::rules::{is_well_formed, LAST_ROW, PLACEHOLDER, WORD_LEN};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};

pub const MSG_SOLVED: &str = "Congratulations!";
pub const MSG_KEEP_TRYING: &str = "Keep trying!";
pub const MSG_BAD_FORMAT: &str = "Guess must be a 5-letter word.";
pub const MSG_NOT_A_WORD: &str = "Not a valid word.";
pub const MSG_FINISHED: &str = "Game is already finished.";

/// Per-position result under full Wordle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Normalized (lowercase) guess
    pub guess: String,
    pub message: String,
    /// Exact-position matches; `None` where the letters differ.
    pub correct_letters: [Option<char>; WORD_LEN],
    pub feedback: [LetterFeedback; WORD_LEN],
    pub status: GameStatus,
}

impl GuessOutcome {
    /// `correctLetters` wire form: the letter or `"_"`.
    pub fn correct_letters_strings(&self) -> Vec<String> {
        self.correct_letters
            .iter()
            .map(|c| String::from(c.unwrap_or(PLACEHOLDER)))
            .collect()
    }
}

/// Check shape and lowercase. Does not consult the dictionary.
pub fn normalize_guess(raw: &str) -> Result<[char; WORD_LEN], DomainError> {
    if !is_well_formed(raw) {
        return Err(DomainError::validation(
            ValidationKind::InvalidGuess,
            MSG_BAD_FORMAT,
        ));
    }
    let mut letters = [' '; WORD_LEN];
    for (slot, byte) in letters.iter_mut().zip(raw.bytes()) {
        *slot = char::from(byte.to_ascii_lowercase());
    }
    Ok(letters)
}

/// Exact-position matches only.
pub fn mark_correct_letters(
    guess: &[char; WORD_LEN],
    solution: &[char; WORD_LEN],
) -> [Option<char>; WORD_LEN] {
    let mut marks = [None; WORD_LEN];
    for i in 0..WORD_LEN {
        if guess[i] == solution[i] {
            marks[i] = Some(guess[i]);
        }
    }
    marks
}

/// Three-way feedback. Exact matches consume solution letters first, then
/// each remaining guess letter is `Present` only while an unmatched copy is
/// left in the solution.
pub fn score_feedback(
    guess: &[char; WORD_LEN],
    solution: &[char; WORD_LEN],
) -> [LetterFeedback; WORD_LEN] {
    let mut feedback = [LetterFeedback::Absent; WORD_LEN];
    let mut remaining = [0u8; 26];

    for i in 0..WORD_LEN {
        if guess[i] == solution[i] {
            feedback[i] = LetterFeedback::Correct;
        } else if let Some(slot) = letter_slot(solution[i]) {
            remaining[slot] += 1;
        }
    }

    for i in 0..WORD_LEN {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(slot) = letter_slot(guess[i]) {
            if remaining[slot] > 0 {
                remaining[slot] -= 1;
                feedback[i] = LetterFeedback::Present;
            }
        }
    }

    feedback
}

fn letter_slot(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| usize::from(c as u8 - b'a'))
}

fn solution_letters(game: &Game) -> Result<[char; WORD_LEN], DomainError> {
    normalize_guess(&game.solution).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Game {} has a malformed solution", game.id),
        )
    })
}

fn keep_trying_message(marks: &[Option<char>; WORD_LEN]) -> String {
    if marks.iter().all(Option::is_none) {
        return MSG_KEEP_TRYING.to_string();
    }
    let pattern = marks
        .iter()
        .map(|c| c.unwrap_or(PLACEHOLDER).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{MSG_KEEP_TRYING} Correct letters: {pattern}")
}

/// Apply `raw_guess` to `game`.
///
/// On error the game is left untouched. On success the guess is written to
/// `grid[current_row]` and the status/row counter advance:
/// - guess equals the solution → `Solved`, row unchanged
/// - miss on the last row → `Exhausted`, row unchanged
/// - otherwise → still `InProgress`, row + 1
pub fn evaluate(
    game: &mut Game,
    dictionary: &Dictionary,
    raw_guess: &str,
) -> Result<GuessOutcome, DomainError> {
    if game.is_finished() {
        return Err(DomainError::conflict(ConflictKind::GameFinished, MSG_FINISHED));
    }

    let letters = normalize_guess(raw_guess)?;
    let guess: String = letters.iter().collect();
    if !dictionary.contains(&guess) {
        return Err(DomainError::validation(
            ValidationKind::WordNotInDictionary,
            MSG_NOT_A_WORD,
        ));
    }

    let solution = solution_letters(game)?;
    let row = usize::from(game.current_row);
    if !game.grid.write_row(row, &letters) {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Game {} row {row} was already written", game.id),
        ));
    }

    let correct_letters = mark_correct_letters(&letters, &solution);
    let feedback = score_feedback(&letters, &solution);

    let message = if letters == solution {
        game.status = GameStatus::Solved;
        MSG_SOLVED.to_string()
    } else if game.current_row == LAST_ROW {
        game.status = GameStatus::Exhausted;
        format!("Game over. The word was {}.", game.solution)
    } else {
        game.current_row += 1;
        keep_trying_message(&correct_letters)
    };

    Ok(GuessOutcome {
        guess,
        message,
        correct_letters,
        feedback,
        status: game.status,
    })
}
