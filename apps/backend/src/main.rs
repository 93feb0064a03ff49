use actix_web::{web, App, HttpServer};
use wordle_backend::config::Config;
use wordle_backend::infra::state::build_state;
use wordle_backend::middleware::cors::cors_middleware;
use wordle_backend::middleware::request_trace::RequestTrace;
use wordle_backend::middleware::structured_logger::StructuredLogger;
use wordle_backend::middleware::trace_span::TraceSpan;
use wordle_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        store = config.store.name(),
        hints = config.hints.is_some(),
        "Starting Wordle backend"
    );

    let app_state = match build_state().with_config(&config).build().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let json_limit = app_state.json_limit;
    let cors_origins = config.cors_allowed_origins.clone();
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(json_limit)
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
