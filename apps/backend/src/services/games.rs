//! Game orchestration: start, guess and hint against the store.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{evaluate, Dictionary, Game, GuessOutcome};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::errors::ErrorCode;
use crate::hints::{HintGenerator, MSG_HINT_FAILED};
use crate::store::GameStore;

pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
    dictionary: Arc<Dictionary>,
    hints: Arc<dyn HintGenerator>,
    rng: Arc<Mutex<ChaCha20Rng>>,
    retry_limit: u32,
}

impl GameService {
    pub fn new(
        store: Arc<dyn GameStore>,
        dictionary: Arc<Dictionary>,
        hints: Arc<dyn HintGenerator>,
    ) -> Self {
        Self {
            store,
            dictionary,
            hints,
            rng: Arc::new(Mutex::new(ChaCha20Rng::from_os_rng())),
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    /// Make solution picks reproducible.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed)));
        self
    }

    /// Total attempts per guess when writes keep losing races. Clamped to 1.
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit.max(1);
        self
    }

    pub fn store(&self) -> &Arc<dyn GameStore> {
        &self.store
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    fn pick_solution(&self) -> String {
        let mut rng = self.rng.lock();
        self.dictionary.choose(&mut *rng).to_string()
    }

    pub async fn start_game(&self) -> Result<Game, AppError> {
        let game = Game::new(Uuid::new_v4(), self.pick_solution());
        self.store.create(&game).await?;
        info!(game_id = %game.id, "Game started");
        Ok(game)
    }

    pub async fn game(&self, id: Uuid) -> Result<Game, AppError> {
        Ok(self.store.load(id).await?)
    }

    /// Load, evaluate and conditionally write one guess.
    ///
    /// Without `if_match`, a lost write race reloads and re-evaluates up to
    /// the retry limit. With `if_match`, any version mismatch is final.
    pub async fn submit_guess(
        &self,
        id: Uuid,
        guess: &str,
        if_match: Option<i32>,
    ) -> Result<(Game, GuessOutcome), AppError> {
        let attempts = if if_match.is_some() { 1 } else { self.retry_limit };

        for attempt in 1..=attempts {
            let mut game = self.store.load(id).await?;

            if let Some(expected) = if_match {
                if game.lock_version != expected {
                    debug!(game_id = %id, expected, actual = game.lock_version, "If-Match mismatch");
                    return Err(version_mismatch(expected, game.lock_version));
                }
            }

            let outcome = evaluate(&mut game, &self.dictionary, guess)?;

            match self.store.save(&game).await {
                Ok(saved) => {
                    info!(
                        game_id = %id,
                        lock_version = saved.lock_version,
                        status = ?outcome.status,
                        attempt,
                        "Guess recorded"
                    );
                    return Ok((saved, outcome));
                }
                Err(err) if err.is_optimistic_lock() => {
                    warn!(game_id = %id, attempt, attempts, "Guess write lost a race");
                    if if_match.is_some() {
                        return Err(err.into());
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AppError::conflict(
            ErrorCode::OptimisticLock,
            format!("Game {id} is being modified concurrently. Please retry."),
        ))
    }

    /// Hints are only served while the game is in progress.
    pub async fn hint(&self, id: Uuid) -> Result<String, AppError> {
        let game = self.store.load(id).await?;
        if game.is_finished() {
            return Err(DomainError::conflict(
                ConflictKind::GameFinished,
                crate::domain::evaluate::MSG_FINISHED,
            )
            .into());
        }

        self.hints.hint(&game.solution).await.map_err(|err| {
            warn!(game_id = %id, generator = self.hints.name(), error = %err, "Hint generation failed");
            AppError::from(DomainError::infra(InfraErrorKind::Generation, MSG_HINT_FAILED))
        })
    }
}

fn version_mismatch(expected: i32, actual: i32) -> AppError {
    AppError::conflict(
        ErrorCode::OptimisticLock,
        format!("Game version mismatch: expected {expected}, but game has version {actual}"),
    )
}
