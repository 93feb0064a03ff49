//! Redis-backed store.
//!
//! One string key per game. Creation uses `SET NX`; updates go through a
//! Lua script that compares the stored `lockVersion` before replacing the
//! value, so the check and the write happen atomically on the server.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, Script};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{game_key, not_found, stale_version, GameRecord, GameStore};
use crate::domain::Game;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// Returns 1 on write, 0 on version mismatch, -1 when the key is missing.
const SAVE_IF_VERSION: &str = r#"
local current = redis.call('GET', KEYS[1])
if not current then
  return -1
end
local stored = cjson.decode(current)
local version = tonumber(stored['lockVersion']) or 0
if version ~= tonumber(ARGV[1]) then
  return 0
end
redis.call('SET', KEYS[1], ARGV[2])
return 1
"#;

#[derive(Debug, Error)]
pub enum RedisStoreError {
    #[error("invalid REDIS_URL: {0}")]
    InvalidUrl(#[source] RedisError),
    #[error("unable to connect to Redis: {0}")]
    Connect(#[source] RedisError),
    #[error("redis {op} failed: {source}")]
    Command {
        op: &'static str,
        #[source]
        source: RedisError,
    },
    #[error("unexpected reply {reply} from save script")]
    UnexpectedReply { reply: i64 },
}

impl From<RedisStoreError> for DomainError {
    fn from(err: RedisStoreError) -> Self {
        let kind = match &err {
            RedisStoreError::Connect(_) => InfraErrorKind::StoreUnavailable,
            RedisStoreError::Command { source, .. }
                if source.is_io_error()
                    || source.is_connection_refusal()
                    || source.is_timeout() =>
            {
                InfraErrorKind::StoreUnavailable
            }
            _ => InfraErrorKind::Store,
        };
        DomainError::infra(kind, err.to_string())
    }
}

fn command(op: &'static str) -> impl FnOnce(RedisError) -> RedisStoreError {
    move |source| RedisStoreError::Command { op, source }
}

pub struct RedisGameStore {
    conn: ConnectionManager,
    save_script: Script,
}

impl RedisGameStore {
    pub async fn connect(redis_url: &str) -> Result<Self, RedisStoreError> {
        let client = Client::open(redis_url).map_err(RedisStoreError::InvalidUrl)?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(RedisStoreError::Connect)?;
        Ok(Self::from_manager(conn))
    }

    pub fn from_manager(conn: ConnectionManager) -> Self {
        Self {
            conn,
            save_script: Script::new(SAVE_IF_VERSION),
        }
    }

    // ConnectionManager is a cheap handle over a multiplexed connection.
    fn conn(&self) -> ConnectionManager {
        self.conn.clone()
    }
}

#[async_trait]
impl GameStore for RedisGameStore {
    async fn create(&self, game: &Game) -> Result<(), DomainError> {
        let payload = GameRecord::from(game).to_json()?;
        let mut conn = self.conn();
        let reply: Option<String> = redis::cmd("SET")
            .arg(game_key(game.id))
            .arg(payload)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(command("SET NX"))?;

        if reply.is_none() {
            return Err(DomainError::conflict(
                ConflictKind::GameExists,
                format!("Game {} already exists", game.id),
            ));
        }
        debug!(game_id = %game.id, "Created game record");
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Game, DomainError> {
        let mut conn = self.conn();
        let raw: Option<String> = conn
            .get(game_key(id))
            .await
            .map_err(command("GET"))?;
        let raw = raw.ok_or_else(|| not_found(id))?;
        GameRecord::decode_game(id, &raw)
    }

    async fn save(&self, game: &Game) -> Result<Game, DomainError> {
        let mut updated = game.clone();
        updated.lock_version = game.lock_version + 1;
        let payload = GameRecord::from(&updated).to_json()?;

        let mut conn = self.conn();
        let reply: i64 = self
            .save_script
            .key(game_key(game.id))
            .arg(game.lock_version)
            .arg(payload)
            .invoke_async(&mut conn)
            .await
            .map_err(command("EVALSHA"))?;

        match reply {
            1 => {
                debug!(game_id = %game.id, lock_version = updated.lock_version, "Saved game record");
                Ok(updated)
            }
            0 => {
                warn!(game_id = %game.id, lock_version = game.lock_version, "Stale game write rejected");
                Err(stale_version(game.id, game.lock_version))
            }
            -1 => Err(not_found(game.id)),
            other => Err(RedisStoreError::UnexpectedReply { reply: other }.into()),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.conn();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(command("PING"))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
