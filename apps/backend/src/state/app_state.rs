use std::sync::Arc;

use crate::extractors::JsonLimit;
use crate::services::GameService;
use crate::store::GameStore;

/// Shared application state, cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub games: GameService,
    pub json_limit: JsonLimit,
}

impl AppState {
    pub fn new(games: GameService, json_limit: JsonLimit) -> Self {
        Self { games, json_limit }
    }

    pub fn store(&self) -> &Arc<dyn GameStore> {
        self.games.store()
    }
}
