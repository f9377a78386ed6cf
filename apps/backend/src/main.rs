use actix_web::{web, App, HttpServer};
use veto_backend::config::ServerConfig;
use veto_backend::infra::state::build_state;
use veto_backend::middleware::cors::cors_middleware;
use veto_backend::middleware::request_trace::RequestTrace;
use veto_backend::middleware::structured_logger::StructuredLogger;
use veto_backend::middleware::trace_span::TraceSpan;
use veto_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = build_state()
        .with_catalog_path(config.catalog_path.clone())
        .build();

    // Surface a bad catalog file at startup; the server still runs and reports it.
    if let Err(e) = app_state.series.catalog() {
        tracing::warn!(error = %e, "Catalog not loadable at startup");
    }

    println!(
        "🚀 Starting Veto Board backend on http://{}:{}",
        config.host, config.port
    );

    let data = web::Data::new(app_state);
    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
