use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Validate a raw `gameId` parameter.
pub fn parse_game_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::invalid(ErrorCode::MissingParameter, "Missing gameId parameter"))?;
    Uuid::parse_str(raw)
        .map_err(|_| AppError::invalid(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}")))
}

#[derive(Debug, Deserialize)]
struct GameIdParams {
    #[serde(rename = "gameId")]
    game_id: Option<String>,
}

/// Game id taken from the `gameId` query parameter.
///
/// Existence is not checked here; the service reports unknown games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameIdQuery(pub Uuid);

impl FromRequest for GameIdQuery {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<GameIdParams>::from_query(req.query_string())
            .map_err(|e| AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {e}")))
            .and_then(|params| parse_game_id(params.game_id.as_deref()))
            .map(GameIdQuery);
        std::future::ready(result)
    }
}
