//! JSON file catalog, loaded on first use and cached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use super::{CatalogSource, ComboCatalog};
use crate::domain::catalog::Catalog;
use crate::errors::domain::DomainError;

/// Failed loads are not cached, so a catalog that becomes readable later is picked up
/// on the next request.
#[derive(Debug)]
pub struct FileCatalog {
    path: PathBuf,
    cached: RwLock<Option<Arc<Catalog>>>,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Catalog, DomainError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::catalog_unavailable(format!(
                "Cannot read catalog {}: {e}",
                self.path.display()
            ))
        })?;
        let source: CatalogSource = serde_json::from_str(&raw).map_err(|e| {
            DomainError::catalog_unavailable(format!(
                "Cannot parse catalog {}: {e}",
                self.path.display()
            ))
        })?;
        source.into_catalog()
    }
}

impl ComboCatalog for FileCatalog {
    fn load(&self) -> Result<Arc<Catalog>, DomainError> {
        if let Some(catalog) = self.cached.read().as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let mut slot = self.cached.write();
        // Another request may have loaded it while we waited.
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        match self.read() {
            Ok(catalog) => {
                info!(
                    path = %self.path.display(),
                    maps = catalog.map_count(),
                    modes = catalog.mode_count(),
                    "Catalog loaded"
                );
                let catalog = Arc::new(catalog);
                *slot = Some(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Catalog unavailable");
                Err(err)
            }
        }
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
