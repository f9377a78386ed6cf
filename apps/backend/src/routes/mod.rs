use actix_web::web;

pub mod catalog;
pub mod health;
pub mod series;

/// Register every route. Used by `main.rs` and by the integration test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Series draft: /api/series/**
    cfg.service(web::scope("/api/series").configure(series::configure_routes));

    // Reference data: /api/maps/**, /api/gamemodes
    cfg.service(web::scope("/api").configure(catalog::configure_routes));
}
