use std::sync::Arc;

use crate::catalog::ComboCatalog;
use crate::repos::SeriesStore;
use crate::services::series::SeriesService;

/// Shared application state handed to every handler through `web::Data`.
pub struct AppState {
    pub series: SeriesService,
}

impl AppState {
    pub fn new(store: Arc<SeriesStore>, catalog: Arc<dyn ComboCatalog>) -> Self {
        Self {
            series: SeriesService::new(store, catalog),
        }
    }
}
