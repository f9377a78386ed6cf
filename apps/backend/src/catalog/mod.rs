//! Catalog sources injected into application state.
//!
//! The draft engine only sees [`ComboCatalog`]; which reference data backs it (the
//! built-in HCS table, a JSON file, a test fixture) is decided when state is built.

pub mod builtin;
pub mod file;

use std::sync::Arc;

use serde::Deserialize;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;

use crate::domain::catalog::{Catalog, GameMode, MapInfo};
use crate::errors::domain::DomainError;

/// Read-only access to the combo catalog.
pub trait ComboCatalog: Send + Sync {
    /// The loaded catalog, or `CatalogUnavailable` when the reference data cannot be read.
    fn load(&self) -> Result<Arc<Catalog>, DomainError>;

    /// Short description for logs and health output.
    fn describe(&self) -> String;
}

/// Catalog already in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Arc<Catalog>,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl ComboCatalog for StaticCatalog {
    fn load(&self) -> Result<Arc<Catalog>, DomainError> {
        Ok(Arc::clone(&self.catalog))
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Catalog that never loads. Used to exercise the unavailable path.
#[derive(Debug, Clone, Default)]
pub struct UnavailableCatalog;

impl ComboCatalog for UnavailableCatalog {
    fn load(&self) -> Result<Arc<Catalog>, DomainError> {
        Err(DomainError::catalog_unavailable(
            "Catalog reference data is not available",
        ))
    }

    fn describe(&self) -> String {
        "unavailable".to_string()
    }
}

/// On-disk catalog document.
///
/// Either explicit `modes`/`maps` lists with ids, or a `mode_maps` table of
/// mode name → map names with ids assigned in name order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogSource {
    Explicit {
        modes: Vec<GameMode>,
        maps: Vec<MapInfo>,
    },
    Table {
        mode_maps: std::collections::BTreeMap<String, Vec<String>>,
    },
}

impl CatalogSource {
    pub fn into_catalog(self) -> Result<Catalog, DomainError> {
        match self {
            CatalogSource::Explicit { modes, maps } => Catalog::new(modes, maps),
            CatalogSource::Table { mode_maps } => {
                let rows: Vec<(String, Vec<String>)> = mode_maps.into_iter().collect();
                Catalog::from_mode_rows(&rows)
            }
        }
    }
}
