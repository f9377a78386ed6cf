use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::series::SeriesId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Series id taken from the `{series_id}` path segment.
///
/// Only the shape is checked here; existence is decided by the store, so an unknown
/// id still surfaces as `SERIES_NOT_FOUND` from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesIdPath(pub SeriesId);

impl SeriesIdPath {
    pub fn get(self) -> SeriesId {
        self.0
    }
}

fn parse_series_id(raw: Option<&str>) -> Result<SeriesIdPath, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidSeriesId, "Missing series_id parameter")
    })?;

    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidSeriesId,
            format!("Invalid series id: {raw}"),
        )
    })?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidSeriesId,
            format!("Series id must be positive, got: {id}"),
        ));
    }

    Ok(SeriesIdPath(id))
}

impl FromRequest for SeriesIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_series_id(req.match_info().get("series_id")))
    }
}
