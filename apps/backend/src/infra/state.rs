use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::catalog::builtin::BuiltinCatalog;
use crate::catalog::file::FileCatalog;
use crate::catalog::ComboCatalog;
use crate::repos::SeriesStore;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    catalog: Option<Arc<dyn ComboCatalog>>,
    store: Option<Arc<SeriesStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            store: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn ComboCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// File-backed catalog when a path is given, the built-in table otherwise.
    pub fn with_catalog_path(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => self.with_catalog(Arc::new(FileCatalog::new(path))),
            None => self.with_catalog(Arc::new(BuiltinCatalog)),
        }
    }

    pub fn with_store(mut self, store: Arc<SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> AppState {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(BuiltinCatalog) as Arc<dyn ComboCatalog>);
        let store = self.store.unwrap_or_default();
        info!(catalog = %catalog.describe(), "Application state built");
        AppState::new(store, catalog)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
