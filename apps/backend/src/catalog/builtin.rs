//! Built-in HCS 2025 map pool.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::ComboCatalog;
use crate::domain::catalog::Catalog;
use crate::errors::domain::DomainError;

/// Mode name → maps it is played on.
pub const HCS_MODE_MAPS: &[(&str, &[&str])] = &[
    (
        "Slayer",
        &["Aquarius", "Live Fire", "Origin", "Recharge", "Solitude", "Streets"],
    ),
    ("Capture the Flag", &["Aquarius", "Forbidden", "Fortress", "Origin"]),
    ("King of the Hill", &["Live Fire", "Recharge", "Lattice"]),
    ("Oddball", &["Live Fire", "Recharge", "Lattice"]),
    ("Strongholds", &["Live Fire", "Recharge", "Lattice"]),
    ("Neutral Bomb", &["Aquarius"]),
];

static HCS: Lazy<Result<Arc<Catalog>, DomainError>> =
    Lazy::new(|| Catalog::from_mode_table(HCS_MODE_MAPS).map(Arc::new));

/// The HCS table, built once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ComboCatalog for BuiltinCatalog {
    fn load(&self) -> Result<Arc<Catalog>, DomainError> {
        HCS.clone()
    }

    fn describe(&self) -> String {
        "builtin:hcs".to_string()
    }
}
