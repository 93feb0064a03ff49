//! Guess parameters from either a query string (GET) or a JSON body (POST).

use actix_web::dev::Payload;
use actix_web::http::Method;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;
use uuid::Uuid;

use super::game_id::parse_game_id;
use super::validated_json::ValidatedJson;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Default, Deserialize)]
struct RawGuessParams {
    #[serde(rename = "gameId")]
    game_id: Option<String>,
    guess: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessParams {
    pub game_id: Uuid,
    /// As sent; format and dictionary checks belong to the evaluator.
    pub guess: String,
}

impl TryFrom<RawGuessParams> for GuessParams {
    type Error = AppError;

    fn try_from(raw: RawGuessParams) -> Result<Self, Self::Error> {
        if raw.game_id.is_none() || raw.guess.is_none() {
            return Err(AppError::invalid(
                ErrorCode::MissingParameter,
                "Missing gameId or guess parameter",
            ));
        }
        let game_id = parse_game_id(raw.game_id.as_deref())?;
        Ok(Self {
            game_id,
            guess: raw.guess.unwrap_or_default(),
        })
    }
}

impl FromRequest for GuessParams {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.method() == Method::POST {
            let body = ValidatedJson::<RawGuessParams>::from_request(req, payload);
            return Box::pin(async move { GuessParams::try_from(body.await?.into_inner()) });
        }

        let result = web::Query::<RawGuessParams>::from_query(req.query_string())
            .map_err(|e| AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {e}")))
            .and_then(|q| GuessParams::try_from(q.into_inner()));
        Box::pin(async move { result })
    }
}
