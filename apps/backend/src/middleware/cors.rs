use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_HEADER;

const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse a comma-separated origin list, keeping only http(s) origins.
/// Empty entries and `null` are dropped.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Origins to allow: the configured list, or localhost when it is empty.
pub fn effective_origins(configured: &[String]) -> Vec<String> {
    if configured.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| (*s).to_string()).collect()
    } else {
        configured.to_vec()
    }
}

/// CORS limited to the methods and headers the game API uses.
pub fn cors_middleware(configured: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::IF_MATCH])
        .expose_headers(vec![
            header::HeaderName::from_static(TRACE_HEADER),
            header::ETAG,
        ])
        .max_age(3600);

    for origin in effective_origins(configured) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
