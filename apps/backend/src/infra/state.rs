use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::domain::Dictionary;
use crate::error::AppError;
use crate::extractors::JsonLimit;
use crate::hints::{DisabledHints, HintConfig, HintGenerator, LlmHintClient};
use crate::services::GameService;
use crate::state::app_state::AppState;
use crate::store::{GameStore, MemoryGameStore, RedisGameStore};

enum StoreChoice {
    Memory,
    Redis(String),
    Provided(Arc<dyn GameStore>),
}

enum DictionaryChoice {
    Builtin,
    File(PathBuf),
    Provided(Dictionary),
}

enum HintChoice {
    Disabled,
    Llm(HintConfig),
    Provided(Arc<dyn HintGenerator>),
}

/// Builder for creating AppState instances (used in both tests and main).
///
/// Defaults: in-memory store, built-in dictionary, hints disabled.
pub struct StateBuilder {
    store: StoreChoice,
    dictionary: DictionaryChoice,
    hints: HintChoice,
    rng_seed: Option<u64>,
    retry_limit: Option<u32>,
    json_limit: JsonLimit,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: StoreChoice::Memory,
            dictionary: DictionaryChoice::Builtin,
            hints: HintChoice::Disabled,
            rng_seed: None,
            retry_limit: None,
            json_limit: JsonLimit::default(),
        }
    }

    /// Apply every setting from `config`.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.store = match &config.store {
            StoreBackend::Redis { url } => StoreChoice::Redis(url.clone()),
            StoreBackend::Memory => StoreChoice::Memory,
        };
        if let Some(path) = &config.dictionary_path {
            self.dictionary = DictionaryChoice::File(path.clone());
        }
        if let Some(hints) = &config.hints {
            self.hints = HintChoice::Llm(hints.clone());
        }
        self.rng_seed = config.rng_seed;
        self.retry_limit = Some(config.guess_retry_limit);
        self.json_limit = JsonLimit(config.max_json_payload_size);
        self
    }

    pub fn with_memory_store(mut self) -> Self {
        self.store = StoreChoice::Memory;
        self
    }

    pub fn with_redis(mut self, url: impl Into<String>) -> Self {
        self.store = StoreChoice::Redis(url.into());
        self
    }

    pub fn with_store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store = StoreChoice::Provided(store);
        self
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = DictionaryChoice::Provided(dictionary);
        self
    }

    pub fn with_hints(mut self, hints: Arc<dyn HintGenerator>) -> Self {
        self.hints = HintChoice::Provided(hints);
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = Some(limit);
        self
    }

    pub fn with_json_limit(mut self, bytes: usize) -> Self {
        self.json_limit = JsonLimit(bytes);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let store: Arc<dyn GameStore> = match self.store {
            StoreChoice::Memory => Arc::new(MemoryGameStore::new()),
            StoreChoice::Redis(url) => Arc::new(
                RedisGameStore::connect(&url)
                    .await
                    .map_err(|e| AppError::config(e.to_string()))?,
            ),
            StoreChoice::Provided(store) => store,
        };

        let dictionary = match self.dictionary {
            DictionaryChoice::Builtin => Dictionary::builtin(),
            DictionaryChoice::File(path) => {
                Dictionary::from_file(&path).map_err(|e| AppError::config(e.to_string()))?
            }
            DictionaryChoice::Provided(dictionary) => dictionary,
        };

        let hints: Arc<dyn HintGenerator> = match self.hints {
            HintChoice::Disabled => Arc::new(DisabledHints),
            HintChoice::Llm(config) => Arc::new(
                LlmHintClient::new(config)
                    .map_err(|e| AppError::config(format!("Hint client setup failed: {e}")))?,
            ),
            HintChoice::Provided(hints) => hints,
        };

        info!(
            store = store.backend(),
            dictionary_words = dictionary.len(),
            hints = hints.name(),
            seeded = self.rng_seed.is_some(),
            "Application state ready"
        );

        let mut games = GameService::new(store, Arc::new(dictionary), hints);
        if let Some(seed) = self.rng_seed {
            games = games.with_rng_seed(seed);
        }
        if let Some(limit) = self.retry_limit {
            games = games.with_retry_limit(limit);
        }

        Ok(AppState::new(games, self.json_limit))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
