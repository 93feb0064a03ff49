//! In-process store backed by a concurrent map.
//!
//! Records are kept in their serialized form so the memory backend goes
//! through the same encode/decode path as Redis.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::{not_found, stale_version, GameRecord, GameStore};
use crate::domain::Game;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    records: DashMap<Uuid, String>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw stored payload, for tests that inspect the record layout.
    pub fn raw(&self, id: Uuid) -> Option<String> {
        self.records.get(&id).map(|r| r.value().clone())
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, game: &Game) -> Result<(), DomainError> {
        let payload = GameRecord::from(game).to_json()?;
        match self.records.entry(game.id) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::GameExists,
                format!("Game {} already exists", game.id),
            )),
            Entry::Vacant(slot) => {
                slot.insert(payload);
                debug!(game_id = %game.id, "Created game record");
                Ok(())
            }
        }
    }

    async fn load(&self, id: Uuid) -> Result<Game, DomainError> {
        let raw = self.raw(id).ok_or_else(|| not_found(id))?;
        GameRecord::decode_game(id, &raw)
    }

    async fn save(&self, game: &Game) -> Result<Game, DomainError> {
        let mut updated = game.clone();
        updated.lock_version = game.lock_version + 1;
        let payload = GameRecord::from(&updated).to_json()?;

        // The entry guard is held across compare and replace.
        let mut entry = self.records.get_mut(&game.id).ok_or_else(|| not_found(game.id))?;
        let stored = GameRecord::from_json(game.id, entry.value())?;
        if stored.lock_version != game.lock_version {
            return Err(stale_version(game.id, game.lock_version));
        }
        *entry.value_mut() = payload;
        drop(entry);

        debug!(game_id = %game.id, lock_version = updated.lock_version, "Saved game record");
        Ok(updated)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
