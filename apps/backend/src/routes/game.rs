//! Game endpoints: start, guess (GET query or POST JSON) and hint.

use actix_web::http::header::ETAG;
use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{GameIdQuery, GuessParams, IfMatch};
use crate::http::etag::{expected_version, game_etag};
use crate::middleware::trace_span::record_game_id;
use crate::protocol::{GuessResponse, HintResponse, StartResponse};
use crate::routes::invalid_request;
use crate::state::app_state::AppState;

/// POST /api/start
async fn start_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game = app_state.games.start_game().await?;
    record_game_id(game.id);

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(game.id, game.lock_version)))
        .json(StartResponse::new(&game)))
}

/// GET /api/guess?gameId=..&guess=.. and POST /api/guess {gameId, guess}
///
/// An `If-Match` header makes the guess conditional on the game version.
async fn submit_guess(
    params: GuessParams,
    if_match: IfMatch,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    record_game_id(params.game_id);
    let expected = match if_match.0.as_deref() {
        Some(value) => {
            // an unknown game is 404 whatever the header holds
            app_state.games.game(params.game_id).await?;
            expected_version(value, params.game_id)?
        }
        None => None,
    };

    let (game, outcome) = app_state
        .games
        .submit_guess(params.game_id, &params.guess, expected)
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(game.id, game.lock_version)))
        .json(GuessResponse::new(&game, outcome)))
}

/// GET /api/hint?gameId=..
async fn get_hint(
    game_id: GameIdQuery,
    app_state: web::Data<AppState>,
) -> Result<web::Json<HintResponse>, AppError> {
    let hint = app_state.games.hint(game_id.0).await?;
    Ok(web::Json(HintResponse::new(game_id.0, hint)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Unsupported methods on known paths get the same answer as unknown paths.
    cfg.service(
        web::resource("/api/start")
            .route(web::post().to(start_game))
            .default_service(web::to(invalid_request)),
    );
    cfg.service(
        web::resource("/api/guess")
            .route(web::get().to(submit_guess))
            .route(web::post().to(submit_guess))
            .default_service(web::to(invalid_request)),
    );
    cfg.service(
        web::resource("/api/hint")
            .route(web::get().to(get_hint))
            .default_service(web::to(invalid_request)),
    );
}
