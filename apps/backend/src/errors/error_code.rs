//! Error codes for the Wordle backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Wordle backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Guess is not five letters
    InvalidGuess,
    /// Guess is well-formed but not a dictionary word
    WordNotInDictionary,
    /// A required query or body parameter is missing
    MissingParameter,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // Business Logic Conflicts
    /// Game is solved or out of rows
    GameFinished,
    /// Game id already present in the store
    GameExists,
    /// Optimistic lock conflict
    OptimisticLock,

    // System Errors
    /// Key-value store command failed
    StoreError,
    /// Key-value store unreachable
    StoreUnavailable,
    /// Hint could not be generated
    HintGenerationFailed,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidGuess => "INVALID_GUESS",
            Self::WordNotInDictionary => "WORD_NOT_IN_DICTIONARY",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",

            // Business Logic Conflicts
            Self::GameFinished => "GAME_FINISHED",
            Self::GameExists => "GAME_EXISTS",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            // System Errors
            Self::StoreError => "STORE_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::HintGenerationFailed => "HINT_GENERATION_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
