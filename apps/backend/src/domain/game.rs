//! Game model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::grid::Grid;
use super::rules::{LAST_ROW, MAX_ROWS};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Explicit game status. Stored records only carry `solved` and
/// `currentRow`; the status is rebuilt from them by [`Game::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Solved,
    Exhausted,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: Uuid,
    pub solution: String,
    pub grid: Grid,
    pub current_row: u8,
    pub status: GameStatus,
    /// Bumped by the store on every successful write.
    pub lock_version: i32,
}

impl Game {
    /// Fresh game: blank grid, first row, version 0. The solution is
    /// stored lowercase.
    pub fn new(id: Uuid, solution: impl Into<String>) -> Self {
        let mut solution = solution.into();
        solution.make_ascii_lowercase();
        Self {
            id,
            solution,
            grid: Grid::new(),
            current_row: 0,
            status: GameStatus::InProgress,
            lock_version: 0,
        }
    }

    pub fn solved(&self) -> bool {
        self.status == GameStatus::Solved
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Rebuild a game from its persisted fields, checking that they describe
    /// a reachable state.
    pub fn from_parts(
        id: Uuid,
        solution: String,
        grid: Grid,
        current_row: u8,
        solved: bool,
        lock_version: i32,
    ) -> Result<Self, DomainError> {
        let corrupt = |detail: String| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Game {id} record is inconsistent: {detail}"),
            )
        };

        if !super::rules::is_well_formed(&solution) {
            return Err(corrupt(format!("solution {solution:?} is not a 5-letter word")));
        }
        if current_row > LAST_ROW {
            return Err(corrupt(format!("currentRow {current_row} out of range")));
        }
        if lock_version < 0 {
            return Err(corrupt(format!("negative lockVersion {lock_version}")));
        }

        let row = usize::from(current_row);
        let current_filled = grid.is_row_filled(row);
        let status = if solved {
            if !current_filled {
                return Err(corrupt("solved but the current row is empty".to_string()));
            }
            GameStatus::Solved
        } else if current_filled && current_row == LAST_ROW {
            GameStatus::Exhausted
        } else if current_filled {
            return Err(corrupt(format!("row {row} is filled but the game did not advance")));
        } else {
            GameStatus::InProgress
        };

        for idx in 0..MAX_ROWS {
            let should_be_filled = idx < row || (idx == row && current_filled);
            if grid.is_row_filled(idx) != should_be_filled {
                return Err(corrupt(format!("row {idx} does not match currentRow {current_row}")));
            }
        }

        Ok(Self {
            id,
            solution: solution.to_ascii_lowercase(),
            grid,
            current_row,
            status,
            lock_version,
        })
    }
}
