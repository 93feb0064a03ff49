use actix_web::dev::Payload;
use actix_web::http::header::IF_MATCH;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Raw `If-Match` header, if any. Resolved against a game id with
/// [`crate::http::etag::expected_version`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IfMatch(pub Option<String>);

impl FromRequest for IfMatch {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.headers().get(IF_MATCH) {
            None => Ok(IfMatch(None)),
            Some(value) => value
                .to_str()
                .map(|s| IfMatch(Some(s.to_string())))
                .map_err(|_| {
                    AppError::bad_request(
                        ErrorCode::InvalidHeader,
                        "If-Match header is not valid ASCII",
                    )
                }),
        };
        std::future::ready(result)
    }
}
