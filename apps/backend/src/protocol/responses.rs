//! JSON bodies of the game endpoints. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Game, GameStatus, Grid, GuessOutcome, LetterFeedback};

pub const MSG_GAME_STARTED: &str = "New game started";
pub const MSG_HINT_READY: &str = "Hint generated";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub message: String,
    pub game_id: Uuid,
    pub grid: Grid,
    pub current_row: u8,
    pub solved: bool,
}

impl StartResponse {
    pub fn new(game: &Game) -> Self {
        Self {
            message: MSG_GAME_STARTED.to_string(),
            game_id: game.id,
            grid: game.grid.clone(),
            current_row: game.current_row,
            solved: game.solved(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub message: String,
    pub game_id: Uuid,
    pub grid: Grid,
    pub current_row: u8,
    pub solved: bool,
    /// Letter where the guess matches the solution at that position, else `"_"`.
    pub correct_letters: Vec<String>,
    pub feedback: Vec<LetterFeedback>,
    pub status: GameStatus,
}

impl GuessResponse {
    pub fn new(game: &Game, outcome: GuessOutcome) -> Self {
        Self {
            correct_letters: outcome.correct_letters_strings(),
            feedback: outcome.feedback.to_vec(),
            message: outcome.message,
            game_id: game.id,
            grid: game.grid.clone(),
            current_row: game.current_row,
            solved: game.solved(),
            status: game.status,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub message: String,
    pub game_id: Uuid,
    pub hint: String,
}

impl HintResponse {
    pub fn new(game_id: Uuid, hint: String) -> Self {
        Self {
            message: MSG_HINT_READY.to_string(),
            game_id,
            hint,
        }
    }
}
