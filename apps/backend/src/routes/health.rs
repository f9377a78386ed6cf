use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    time: String,
    catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_error: Option<String>,
    catalog_source: String,
    maps: usize,
    modes: usize,
    series: usize,
    actions: usize,
}

/// GET /health
///
/// Always 200: an unavailable catalog is reported in the body, not as a failure.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let service = &app_state.series;
    let (catalog, catalog_error, maps, modes) = match service.catalog() {
        Ok(c) => ("ok".to_string(), None, c.map_count(), c.mode_count()),
        Err(e) => ("unavailable".to_string(), Some(e.to_string()), 0, 0),
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        time,
        catalog,
        catalog_error,
        catalog_source: service.catalog_source(),
        maps,
        modes,
        series: service.store().len(),
        actions: service.store().action_count(),
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
