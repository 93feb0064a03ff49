//! Application configuration loaded from environment variables.
//!
//! Parsing is done over a lookup function so it can be exercised without
//! touching the process environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::extractors::validated_json::DEFAULT_JSON_LIMIT;
use crate::hints::llm::{DEFAULT_MODEL, DEFAULT_TIMEOUT};
use crate::hints::HintConfig;
use crate::middleware::cors::parse_allowed_origins;
use crate::services::games::DEFAULT_RETRY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Redis { url: String },
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Redis { .. } => "redis",
            StoreBackend::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub store: StoreBackend,

    /// Newline-separated word list; the built-in list is used when unset.
    pub dictionary_path: Option<PathBuf>,
    pub rng_seed: Option<u64>,
    pub guess_retry_limit: u32,

    /// `None` disables hints.
    pub hints: Option<HintConfig>,

    pub max_json_payload_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = get("WORDLE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&get, "WORDLE_PORT", 3001u16)?;

        let store = match get("STORE_BACKEND")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("redis") => StoreBackend::Redis {
                url: get("REDIS_URL").ok_or_else(|| {
                    AppError::config("REDIS_URL must be set when STORE_BACKEND=redis")
                })?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(AppError::config(format!(
                    "STORE_BACKEND must be 'redis' or 'memory', got '{other}'"
                )))
            }
        };

        let dictionary_path = get("WORDLE_DICTIONARY_PATH").map(PathBuf::from);
        let rng_seed = get("WORDLE_RNG_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("WORDLE_RNG_SEED must be an unsigned integer, got '{raw}'"))
                })
            })
            .transpose()?;

        let guess_retry_limit = positive_or(&get, "GUESS_RETRY_LIMIT", DEFAULT_RETRY_LIMIT)?;

        let hints = match get("HINT_API_URL") {
            None => None,
            Some(api_url) => Some(HintConfig {
                api_url,
                api_key: get("HINT_API_KEY"),
                model: get("HINT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                timeout: Duration::from_secs(positive_or(
                    &get,
                    "HINT_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT.as_secs(),
                )?),
            }),
        };

        let max_json_payload_size =
            positive_or(&get, "MAX_JSON_PAYLOAD_SIZE", DEFAULT_JSON_LIMIT)?;
        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_allowed_origins(&raw))
            .unwrap_or_default();

        Ok(Config {
            host,
            port,
            store,
            dictionary_path,
            rng_seed,
            guess_retry_limit,
            hints,
            max_json_payload_size,
            cors_allowed_origins,
        })
    }
}

fn parse_or<T, G>(get: &G, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} has an invalid value: '{raw}'"))
        }),
    }
}

/// Like [`parse_or`], but zero is rejected.
fn positive_or<T, G>(get: &G, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + Default + PartialEq,
    G: Fn(&str) -> Option<String>,
{
    let value = parse_or(get, name, default)?;
    if value == T::default() {
        return Err(AppError::config(format!("{name} must be at least 1")));
    }
    Ok(value)
}
