//! ETag helpers for optimistic concurrency on games.
//!
//! Every game response carries `ETag: "game-{id}-v{lockVersion}"`. Clients
//! may echo it back in `If-Match` to make a guess conditional on the version
//! they last saw.

use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

const PREFIX: &str = "game-";
const VERSION_MARKER: &str = "-v";

/// Format: `"game-{id}-v{version}"` (quoted, as HTTP requires).
///
/// ```
/// # use wordle_backend::http::etag::game_etag;
/// # use uuid::Uuid;
/// let etag = game_etag(Uuid::nil(), 5);
/// assert_eq!(etag, r#""game-00000000-0000-0000-0000-000000000000-v5""#);
/// ```
pub fn game_etag(id: Uuid, version: i32) -> String {
    format!(r#""{PREFIX}{id}-v{version}""#)
}

fn invalid(detail: String) -> AppError {
    AppError::bad_request(ErrorCode::InvalidHeader, detail)
}

/// Split a game ETag into its id and version. Weak validators (`W/`) are
/// accepted.
pub fn parse_game_etag(raw: &str) -> Result<(Uuid, i32), AppError> {
    let s = raw.trim();
    let s = s.strip_prefix("W/").unwrap_or(s).trim_matches('"');

    let body = s.strip_prefix(PREFIX).ok_or_else(|| {
        invalid(format!(
            "Invalid ETag format: expected \"game-{{id}}-v{{version}}\", got: \"{s}\""
        ))
    })?;
    let marker = body.rfind(VERSION_MARKER).ok_or_else(|| {
        invalid(format!("Invalid ETag format: missing version marker in \"{s}\""))
    })?;

    let (id_part, version_part) = (&body[..marker], &body[marker + VERSION_MARKER.len()..]);
    let id = Uuid::parse_str(id_part)
        .map_err(|_| invalid(format!("Invalid ETag format: bad game id \"{id_part}\"")))?;
    let version = version_part.parse::<i32>().map_err(|_| {
        invalid(format!(
            "Invalid ETag format: version must be a valid integer, got: \"{version_part}\""
        ))
    })?;
    Ok((id, version))
}

/// Resolve an `If-Match` header for game `id` to the expected version.
///
/// `*` matches any version and yields `None`. An ETag minted for another
/// game is a conflict, not a format error.
pub fn expected_version(if_match: &str, id: Uuid) -> Result<Option<i32>, AppError> {
    if if_match.trim() == "*" {
        return Ok(None);
    }
    let (etag_id, version) = parse_game_etag(if_match)?;
    if etag_id != id {
        return Err(AppError::conflict(
            ErrorCode::OptimisticLock,
            format!("If-Match refers to game {etag_id}, not {id}"),
        ));
    }
    Ok(Some(version))
}
