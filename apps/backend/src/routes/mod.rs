use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod game;
pub mod health;

/// Body returned for any path or method the API does not serve.
pub const MSG_INVALID_REQUEST: &str = "Invalid request";

pub(crate) async fn invalid_request() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": MSG_INVALID_REQUEST }))
}

/// Register every route plus the catch-all. Used by `main.rs` and by tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(game::configure_routes)
        .default_service(web::to(invalid_request));
}
