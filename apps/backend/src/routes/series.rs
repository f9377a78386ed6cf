//! Series HTTP routes.
//!
//! Every handler is a thin shell over `SeriesService`: parse the path and body, read
//! `If-Match`, run the event, and answer with the full projection plus its `ETag`.

use actix_web::http::header::ETAG;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::snapshot::SeriesView;
use crate::domain::types::{MapId, ModeId, Phase, Ruleset, SeriesType};
use crate::error::AppError;
use crate::extractors::series_id::SeriesIdPath;
use crate::extractors::validated_json::ValidatedJson;
use crate::http::etag::{expected_version, if_none_match_hits, series_etag};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignTeamsRequest {
    pub team_a: String,
    pub team_b: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmSeriesTypeRequest {
    pub series_type: String,
    #[serde(default)]
    pub ruleset: Option<String>,
}

/// Body for both `/ban` and `/pick`.
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    /// `"A"`, `"B"` or a team name.
    pub team: String,
    pub map_id: u32,
    /// May be omitted on slayer turns.
    #[serde(default)]
    pub mode_id: Option<u32>,
}

#[derive(Debug, Serialize)]
struct StateResponse {
    state: Phase,
}

fn with_etag(status: StatusCode, view: SeriesView) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ETAG, series_etag(view.id, view.version)))
        .json(view)
}

/// GET /api/series
async fn list_series(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.series.list()))
}

/// POST /api/series
async fn create_series(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = app_state.series.create();
    Ok(with_etag(StatusCode::CREATED, view))
}

/// GET /api/series/{series_id}
///
/// Returns `304 Not Modified` when `If-None-Match` carries the current ETag.
async fn get_series(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.series.get(series_id.get())?;
    let etag = series_etag(view.id, view.version);

    if if_none_match_hits(&http_req, &etag) {
        return Ok(HttpResponse::NotModified()
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(with_etag(StatusCode::OK, view))
}

/// DELETE /api/series/{series_id}
async fn delete_series(
    series_id: SeriesIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.series.delete(series_id.get())?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/series/{series_id}/state
async fn series_state(
    series_id: SeriesIdPath,
    app_state: web::Data<AppState>,
) -> Result<web::Json<StateResponse>, AppError> {
    let view = app_state.series.get(series_id.get())?;
    Ok(web::Json(StateResponse { state: view.phase }))
}

/// POST /api/series/{series_id}/assign_roles
async fn assign_roles(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    body: ValidatedJson<AssignTeamsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let view = app_state.series.assign_teams(
        series_id.get(),
        &body.team_a,
        &body.team_b,
        expected,
    )?;
    Ok(with_etag(StatusCode::OK, view))
}

/// POST /api/series/{series_id}/confirm_tsd
async fn confirm_tsd(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    body: ValidatedJson<ConfirmSeriesTypeRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let body = body.into_inner();
    let series_type: SeriesType = body.series_type.parse()?;
    let ruleset = body
        .ruleset
        .as_deref()
        .map(str::parse::<Ruleset>)
        .transpose()?;

    let view = app_state.series.confirm_series_type(
        series_id.get(),
        series_type,
        ruleset,
        expected,
    )?;
    Ok(with_etag(StatusCode::OK, view))
}

/// POST /api/series/{series_id}/ban
async fn ban(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    body: ValidatedJson<ActionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let view = app_state.series.ban(
        series_id.get(),
        &body.team,
        MapId(body.map_id),
        body.mode_id.map(ModeId),
        expected,
    )?;
    Ok(with_etag(StatusCode::OK, view))
}

/// POST /api/series/{series_id}/pick
async fn pick(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    body: ValidatedJson<ActionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let view = app_state.series.pick(
        series_id.get(),
        &body.team,
        MapId(body.map_id),
        body.mode_id.map(ModeId),
        expected,
    )?;
    Ok(with_etag(StatusCode::OK, view))
}

/// POST /api/series/{series_id}/undo
async fn undo(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let view = app_state.series.undo(series_id.get(), expected)?;
    Ok(with_etag(StatusCode::OK, view))
}

/// POST /api/series/{series_id}/reset
async fn reset(
    http_req: HttpRequest,
    series_id: SeriesIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, series_id.get())?;
    let view = app_state.series.reset(series_id.get(), expected)?;
    Ok(with_etag(StatusCode::OK, view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_series))
            .route(web::post().to(create_series)),
    )
    .service(
        web::resource("/{series_id}")
            .route(web::get().to(get_series))
            .route(web::delete().to(delete_series)),
    )
    .service(web::resource("/{series_id}/state").route(web::get().to(series_state)))
    .service(web::resource("/{series_id}/assign_roles").route(web::post().to(assign_roles)))
    .service(web::resource("/{series_id}/confirm_tsd").route(web::post().to(confirm_tsd)))
    .service(web::resource("/{series_id}/ban").route(web::post().to(ban)))
    .service(web::resource("/{series_id}/pick").route(web::post().to(pick)))
    .service(web::resource("/{series_id}/undo").route(web::post().to(undo)))
    .service(web::resource("/{series_id}/reset").route(web::post().to(reset)));
}
