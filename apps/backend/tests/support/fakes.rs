//! Test doubles for the store and hint seams.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;
use wordle_backend::domain::Game;
use wordle_backend::errors::domain::{DomainError, InfraErrorKind};
use wordle_backend::{GameStore, HintError, HintGenerator, MemoryGameStore};

/// Returns a fixed hint and remembers which words it was asked about.
#[derive(Default)]
pub struct StaticHints {
    pub text: String,
    pub seen: Mutex<Vec<String>>,
}

impl StaticHints {
    pub fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HintGenerator for StaticHints {
    async fn hint(&self, solution: &str) -> Result<String, HintError> {
        self.seen.lock().push(solution.to_string());
        Ok(self.text.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Every hint request fails the way a dead upstream would.
pub struct BrokenHints;

#[async_trait]
impl HintGenerator for BrokenHints {
    async fn hint(&self, _solution: &str) -> Result<String, HintError> {
        Err(HintError::Status {
            status: 503,
            body: "upstream unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

/// Store whose every operation reports the backend as unreachable.
pub struct UnavailableStore;

fn unavailable() -> DomainError {
    DomainError::infra(InfraErrorKind::StoreUnavailable, "connection refused")
}

#[async_trait]
impl GameStore for UnavailableStore {
    async fn create(&self, _game: &Game) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn load(&self, _id: Uuid) -> Result<Game, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _game: &Game) -> Result<Game, DomainError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(unavailable())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

/// Memory store where the next `races` saves lose to a simulated
/// concurrent writer that bumps the stored version first.
pub struct RacingStore {
    pub inner: MemoryGameStore,
    races: AtomicU32,
    pub saves: AtomicU32,
}

impl RacingStore {
    pub fn new(races: u32) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryGameStore::new(),
            races: AtomicU32::new(races),
            saves: AtomicU32::new(0),
        })
    }
}

#[async_trait]
impl GameStore for RacingStore {
    async fn create(&self, game: &Game) -> Result<(), DomainError> {
        self.inner.create(game).await
    }

    async fn load(&self, id: Uuid) -> Result<Game, DomainError> {
        self.inner.load(id).await
    }

    async fn save(&self, game: &Game) -> Result<Game, DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let lose = self
            .races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if lose {
            let current = self.inner.load(game.id).await?;
            self.inner.save(&current).await?;
        }
        self.inner.save(game).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.inner.ping().await
    }

    fn backend(&self) -> &'static str {
        "racing"
    }
}
