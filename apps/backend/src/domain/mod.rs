//! Domain layer: pure game logic types and helpers.

pub mod dictionary;
pub mod evaluate;
pub mod game;
pub mod grid;
pub mod rules;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_evaluate;
#[cfg(test)]
mod tests_props_evaluate;

// Re-exports for ergonomics
pub use dictionary::{Dictionary, DictionaryError};
pub use evaluate::{evaluate, GuessOutcome, LetterFeedback};
pub use game::{Game, GameStatus};
pub use grid::Grid;
