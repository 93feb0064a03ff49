//! Guess grid and its wire format.
//!
//! On the wire (HTTP responses and stored records) the grid is a 6×5 array
//! of strings, each either `""` or a single lowercase letter. In memory each
//! cell is an `Option<char>`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rules::{MAX_ROWS, WORD_LEN};

pub type Row = [Option<char>; WORD_LEN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; MAX_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Blank 6×5 grid.
    pub fn new() -> Self {
        Self {
            rows: [[None; WORD_LEN]; MAX_ROWS],
        }
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn is_row_filled(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    pub fn is_row_empty(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.iter().all(Option::is_none))
    }

    /// Write a word into an empty row. Returns `false` without touching the
    /// grid if the row is out of range or already holds letters.
    pub fn write_row(&mut self, index: usize, letters: &[char; WORD_LEN]) -> bool {
        if !self.is_row_empty(index) {
            return false;
        }
        for (cell, letter) in self.rows[index].iter_mut().zip(letters) {
            *cell = Some(*letter);
        }
        true
    }

    /// Rows as the wire representation.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Vec<String>>::deserialize(deserializer)?;
        if raw.len() != MAX_ROWS {
            return Err(D::Error::custom(format!(
                "grid must have {MAX_ROWS} rows, got {}",
                raw.len()
            )));
        }

        let mut grid = Grid::new();
        for (row_idx, raw_row) in raw.iter().enumerate() {
            if raw_row.len() != WORD_LEN {
                return Err(D::Error::custom(format!(
                    "grid row {row_idx} must have {WORD_LEN} cells, got {}",
                    raw_row.len()
                )));
            }
            for (col_idx, cell) in raw_row.iter().enumerate() {
                grid.rows[row_idx][col_idx] = parse_cell(cell).ok_or_else(|| {
                    D::Error::custom(format!("invalid grid cell at {row_idx},{col_idx}: {cell:?}"))
                })?;
            }
            if !grid.is_row_filled(row_idx) && !grid.is_row_empty(row_idx) {
                return Err(D::Error::custom(format!(
                    "grid row {row_idx} is partially filled"
                )));
            }
        }
        Ok(grid)
    }
}

/// `""` → empty cell, one ASCII letter → that letter lowercased.
fn parse_cell(cell: &str) -> Option<Option<char>> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) if c.is_ascii_alphabetic() => Some(Some(c.to_ascii_lowercase())),
        _ => None,
    }
}
