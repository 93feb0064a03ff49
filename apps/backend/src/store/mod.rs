//! Game persistence.
//!
//! Stores are opaque key-value services holding one JSON record per game.
//! Every write after creation is conditional on the record's `lockVersion`
//! so concurrent guesses on one game cannot silently overwrite each other.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Game;
use crate::errors::domain::DomainError;

pub mod memory;
pub mod record;
pub mod redis;

pub use memory::MemoryGameStore;
pub use record::GameRecord;
pub use redis::RedisGameStore;

/// Key under which a game record is stored.
pub fn game_key(id: Uuid) -> String {
    format!("wordle:game:{id}")
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist a brand-new game. Fails with `ConflictKind::GameExists` if the
    /// id is already taken.
    async fn create(&self, game: &Game) -> Result<(), DomainError>;

    /// Load a game by id, or `NotFoundKind::Game`.
    async fn load(&self, id: Uuid) -> Result<Game, DomainError>;

    /// Overwrite a game if the stored `lockVersion` still equals
    /// `game.lock_version`. Returns the game with its new version.
    ///
    /// A stale version yields `ConflictKind::OptimisticLock`.
    async fn save(&self, game: &Game) -> Result<Game, DomainError>;

    /// Connectivity probe.
    async fn ping(&self) -> Result<(), DomainError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

pub(crate) fn not_found(id: Uuid) -> DomainError {
    DomainError::not_found(
        crate::errors::domain::NotFoundKind::Game,
        format!("Game with id {id} not found"),
    )
}

pub(crate) fn stale_version(id: Uuid, expected: i32) -> DomainError {
    DomainError::conflict(
        crate::errors::domain::ConflictKind::OptimisticLock,
        format!("Game {id} was modified concurrently (expected version {expected})"),
    )
}
