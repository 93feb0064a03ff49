//! Stored JSON layout of a game.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Game, Grid};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Mirrors the game fields one to one, plus the version token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub solution: String,
    pub grid: Grid,
    pub current_row: u8,
    pub solved: bool,
    #[serde(default)]
    pub lock_version: i32,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            solution: game.solution.clone(),
            grid: game.grid.clone(),
            current_row: game.current_row,
            solved: game.solved(),
            lock_version: game.lock_version,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = DomainError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::from_parts(
            record.id,
            record.solution,
            record.grid,
            record.current_row,
            record.solved,
            record.lock_version,
        )
    }
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("serialize".to_string()),
                format!("Failed to serialize game {}: {e}", self.id),
            )
        })
    }

    pub fn from_json(id: Uuid, raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored record for game {id} is unreadable: {e}"),
            )
        })
    }

    /// Decode a stored payload straight into a validated game.
    pub fn decode_game(id: Uuid, raw: &str) -> Result<Game, DomainError> {
        let record = Self::from_json(id, raw)?;
        if record.id != id {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Record stored under game {id} carries id {}", record.id),
            ));
        }
        Game::try_from(record)
    }
}
