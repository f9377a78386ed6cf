//! ETag helpers for optimistic concurrency on series.
//!
//! Every series response carries `ETag: "series-{id}-v{version}"`. Mutating requests may
//! send it back in `If-Match`; reads may send it in `If-None-Match` to get a 304.

use actix_web::http::header::{IF_MATCH, IF_NONE_MATCH};
use actix_web::HttpRequest;

use crate::domain::series::SeriesId;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;

/// Format: `"series-{id}-v{version}"`, quotes included.
///
/// ```
/// # use veto_backend::http::etag::series_etag;
/// assert_eq!(series_etag(12, 3), r#""series-12-v3""#);
/// ```
pub fn series_etag(id: SeriesId, version: u32) -> String {
    format!(r#""series-{id}-v{version}""#)
}

fn invalid_etag(s: &str) -> AppError {
    AppError::bad_request(
        ErrorCode::InvalidHeader,
        format!("Invalid ETag format: expected \"series-{{id}}-v{{version}}\", got: \"{s}\""),
    )
}

/// Split a series ETag into `(id, version)`. Weak validators (`W/`) are accepted.
pub fn parse_series_etag(raw: &str) -> Result<(SeriesId, u32), AppError> {
    let s = raw.trim();
    let s = s.strip_prefix("W/").unwrap_or(s).trim_matches('"');

    let (id_str, version_str) = s
        .strip_prefix("series-")
        .and_then(|rest| rest.split_once("-v"))
        .ok_or_else(|| invalid_etag(s))?;

    let id = id_str
        .parse::<SeriesId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid_etag(s))?;

    let version = version_str.parse::<u32>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: version must be a non-negative integer, got: \"{version_str}\""),
        )
    })?;

    Ok((id, version))
}

/// Version the client expects series `id` to be at, from `If-Match`.
///
/// `None` when the header is absent or `*`; a malformed value is a 400. A tag issued for
/// another series can never match and is reported as an optimistic lock conflict.
pub fn expected_version(req: &HttpRequest, id: SeriesId) -> Result<Option<u32>, AppError> {
    let Some(value) = req.headers().get(IF_MATCH) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidHeader, "If-Match must be visible ASCII")
    })?;

    if value.trim() == "*" {
        return Ok(None);
    }

    let (tag_id, version) = parse_series_etag(value)?;
    if tag_id != id {
        return Err(DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!("If-Match refers to series {tag_id}, not series {id}"),
        )
        .into());
    }
    Ok(Some(version))
}

/// True when any entity tag in `If-None-Match` matches `etag` (or the header is `*`).
pub fn if_none_match_hits(req: &HttpRequest, etag: &str) -> bool {
    let Some(value) = req
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    value.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}
