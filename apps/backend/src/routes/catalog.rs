//! Read-only catalog routes: maps, game modes and map/mode combos.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::domain::catalog::ComboFilter;
use crate::domain::types::Family;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// `?mode=<name>&type=objective|slayer`
#[derive(Debug, Default, Deserialize)]
pub struct ComboQuery {
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub family: Option<String>,
}

impl ComboQuery {
    fn into_filter(self) -> Result<ComboFilter, AppError> {
        let family = match self.family.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<Family>().map_err(|_| {
                AppError::bad_request(
                    ErrorCode::BadRequest,
                    format!("Unknown combo type '{raw}' (expected objective or slayer)"),
                )
            })?),
        };
        let mode = self.mode.filter(|m| !m.trim().is_empty());
        Ok(ComboFilter { mode, family })
    }
}

/// GET /api/maps
async fn list_maps(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = app_state.series.catalog()?;
    Ok(HttpResponse::Ok().json(catalog.map_views()))
}

/// GET /api/gamemodes
async fn list_game_modes(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = app_state.series.catalog()?;
    Ok(HttpResponse::Ok().json(catalog.game_modes()))
}

/// GET /api/maps/combos
async fn list_combos(
    query: web::Query<ComboQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let catalog = app_state.series.catalog()?;
    Ok(HttpResponse::Ok().json(catalog.combos(&filter)))
}

/// GET /api/maps/combos/grouped
async fn grouped_combos(
    query: web::Query<ComboQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let catalog = app_state.series.catalog()?;
    Ok(HttpResponse::Ok().json(catalog.grouped(&filter)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/maps").route(web::get().to(list_maps)))
        .service(web::resource("/maps/combos").route(web::get().to(list_combos)))
        .service(web::resource("/maps/combos/grouped").route(web::get().to(grouped_combos)))
        .service(web::resource("/gamemodes").route(web::get().to(list_game_modes)));
}
