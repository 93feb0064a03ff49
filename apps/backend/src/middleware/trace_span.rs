//! Per-request tracing span.
//!
//! Every request runs inside a span named `request` carrying `trace_id`,
//! `method`, `path` and `game_id`. The game id is filled from the query
//! string when present; handlers that read it from a JSON body record it
//! through [`record_game_id`]. Needs `RequestTrace` wrapped outside it:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)
//!     .wrap(RequestTrace)

use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::field::{display, Empty};
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

use super::request_trace::TraceId;

/// Attach the game being played to the current request span.
pub fn record_game_id(id: Uuid) {
    Span::current().record("game_id", display(id));
}

/// `gameId` from a raw query string, if it is there at all. Not validated.
fn query_game_id(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    web::Query::<HashMap<String, String>>::from_query(query)
        .ok()
        .and_then(|q| q.into_inner().remove("gameId"))
        .filter(|id| !id.trim().is_empty())
}

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            game_id = Empty,
        );
        if let Some(game_id) = query_game_id(req.query_string()) {
            span.record("game_id", game_id.as_str());
        }

        let fut = span.in_scope(|| self.service.call(req));
        Box::pin(fut.instrument(span))
    }
}
