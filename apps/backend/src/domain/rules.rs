//! Fixed board dimensions.

/// Letters per word and per grid row.
pub const WORD_LEN: usize = 5;

/// Rows on the board, one per allowed guess.
pub const MAX_ROWS: usize = 6;

/// Index of the last writable row. A miss on this row ends the game.
pub const LAST_ROW: u8 = (MAX_ROWS - 1) as u8;

/// Marker used in `correctLetters` for positions that did not match.
pub const PLACEHOLDER: char = '_';

/// True when `word` is exactly `WORD_LEN` ASCII letters (any case).
pub fn is_well_formed(word: &str) -> bool {
    word.len() == WORD_LEN && word.bytes().all(|b| b.is_ascii_alphabetic())
}
