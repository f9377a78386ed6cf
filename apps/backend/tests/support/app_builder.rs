use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use veto_backend::catalog::ComboCatalog;
use veto_backend::infra::state::build_state;
use veto_backend::middleware::request_trace::RequestTrace;
use veto_backend::middleware::structured_logger::StructuredLogger;
use veto_backend::middleware::trace_span::TraceSpan;
use veto_backend::routes;
use veto_backend::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for test Actix services wired with the production middleware stack.
pub struct TestAppBuilder {
    state: web::Data<AppState>,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: web::Data<AppState>) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// Register the production routes.
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    /// Register custom routes instead.
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(self.state)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                }),
        )
        .await
    }
}

/// State backed by the built-in catalog and an empty store.
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(build_state().build())
}

/// State backed by the given catalog.
pub fn test_state_with_catalog(catalog: Arc<dyn ComboCatalog>) -> web::Data<AppState> {
    web::Data::new(build_state().with_catalog(catalog).build())
}

pub fn create_test_app(state: web::Data<AppState>) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
