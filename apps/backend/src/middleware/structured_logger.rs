use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;

/// Fields of the `request_completed` event.
struct Completed {
    method: String,
    path: String,
    query_present: bool,
    trace_id: String,
    status: StatusCode,
    duration_us: u64,
}

impl Completed {
    /// 5xx at error, 4xx at warn, everything else at info.
    fn emit(&self) {
        let status = self.status.as_u16();
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);
        let (query_present, duration_us) = (self.query_present, self.duration_us);

        if self.status.is_server_error() {
            error!(http.method = %method, url.path = %path, query_present, http.status_code = status, duration_us, trace_id = %trace_id, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %method, url.path = %path, query_present, http.status_code = status, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, query_present, http.status_code = status, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}

/// Logs one `request_completed` event per request, including the catch-all
/// and error responses.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let query_present = !req.query_string().is_empty();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map_or_else(|| "unknown".to_string(), |t| t.0.clone());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            Completed {
                method,
                path,
                query_present,
                trace_id,
                status,
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            }
            .emit();

            result
        })
    }
}
