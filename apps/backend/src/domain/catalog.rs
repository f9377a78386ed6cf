//! Combo catalog: maps, game modes and the legal map × mode combinations.
//!
//! A `Catalog` is immutable once built. Construction validates the reference data so
//! that every combo it hands out references a map whose mode set contains that mode.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::types::{Family, MapId, ModeId};
use crate::errors::domain::DomainError;

/// Name of the one mode that forms the slayer family.
pub const SLAYER_MODE_NAME: &str = "Slayer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub id: ModeId,
    pub name: String,
    #[serde(default)]
    pub is_slayer: bool,
}

impl GameMode {
    pub fn family(&self) -> Family {
        if self.is_slayer {
            Family::Slayer
        } else {
            Family::Objective
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    pub id: MapId,
    pub name: String,
    /// Compatible mode ids.
    pub modes: Vec<ModeId>,
}

/// A legal (map, mode) pairing resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    pub map_id: MapId,
    pub map: String,
    pub mode_id: ModeId,
    pub mode: String,
    pub family: Family,
}

/// Optional filters shared by the flat and grouped combo listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboFilter {
    /// Exact mode name, case-insensitive.
    pub mode: Option<String>,
    pub family: Option<Family>,
}

impl ComboFilter {
    fn admits(&self, mode: &GameMode) -> bool {
        if let Some(name) = &self.mode {
            if !mode.name.eq_ignore_ascii_case(name.trim()) {
                return false;
            }
        }
        match self.family {
            Some(family) => mode.family() == family,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboEntry {
    pub map_id: MapId,
    pub map: String,
    pub mode_id: ModeId,
    pub mode: String,
    pub is_objective: bool,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapRef {
    pub map_id: MapId,
    pub map: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeGroup {
    pub mode_id: ModeId,
    pub mode: String,
    pub combos: Vec<MapRef>,
}

/// Combos split by family: objective grouped per mode, slayer as a flat map list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCombos {
    pub objective: Vec<ModeGroup>,
    pub slayer: Vec<MapRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeRef {
    pub id: ModeId,
    pub name: String,
}

/// Map listing entry with its compatible modes expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapView {
    pub id: MapId,
    pub name: String,
    pub modes: Vec<ModeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    modes: BTreeMap<ModeId, GameMode>,
    maps: BTreeMap<MapId, MapInfo>,
    slayer_mode: ModeId,
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::catalog_unavailable(format!("Invalid catalog: {}", detail.into()))
}

impl Catalog {
    pub fn new(modes: Vec<GameMode>, maps: Vec<MapInfo>) -> Result<Self, DomainError> {
        let mut by_id = BTreeMap::new();
        let mut names = BTreeSet::new();
        for mode in modes {
            if mode.name.trim().is_empty() {
                return Err(invalid(format!("mode {} has an empty name", mode.id)));
            }
            if !names.insert(mode.name.to_lowercase()) {
                return Err(invalid(format!("duplicate mode name '{}'", mode.name)));
            }
            if by_id.contains_key(&mode.id) {
                return Err(invalid(format!("duplicate mode id {}", mode.id)));
            }
            by_id.insert(mode.id, mode);
        }

        let slayer: Vec<ModeId> = by_id
            .values()
            .filter(|m| m.is_slayer)
            .map(|m| m.id)
            .collect();
        let slayer_mode = match slayer.as_slice() {
            [only] => *only,
            [] => return Err(invalid("no slayer mode defined")),
            _ => return Err(invalid("more than one slayer mode defined")),
        };

        let mut map_by_id = BTreeMap::new();
        let mut map_names = BTreeSet::new();
        for mut map in maps {
            if map.name.trim().is_empty() {
                return Err(invalid(format!("map {} has an empty name", map.id)));
            }
            if !map_names.insert(map.name.to_lowercase()) {
                return Err(invalid(format!("duplicate map name '{}'", map.name)));
            }
            if map_by_id.contains_key(&map.id) {
                return Err(invalid(format!("duplicate map id {}", map.id)));
            }
            if let Some(unknown) = map.modes.iter().find(|id| !by_id.contains_key(id)) {
                return Err(invalid(format!(
                    "map '{}' references unknown mode {unknown}",
                    map.name
                )));
            }
            map.modes.sort();
            map.modes.dedup();
            map_by_id.insert(map.id, map);
        }

        Ok(Self {
            modes: by_id,
            maps: map_by_id,
            slayer_mode,
        })
    }

    /// Build a catalog from `(mode name, [map names])` rows.
    ///
    /// Ids are assigned in name order starting at 1, separately for modes and maps.
    /// The mode named "Slayer" forms the slayer family.
    pub fn from_mode_table(table: &[(&str, &[&str])]) -> Result<Self, DomainError> {
        let rows = table
            .iter()
            .map(|(mode, maps)| {
                (
                    (*mode).to_string(),
                    maps.iter().map(|m| (*m).to_string()).collect(),
                )
            })
            .collect::<Vec<(String, Vec<String>)>>();
        Self::from_mode_rows(&rows)
    }

    /// Owned-row form of [`Catalog::from_mode_table`].
    pub fn from_mode_rows(rows: &[(String, Vec<String>)]) -> Result<Self, DomainError> {
        let mut mode_names = BTreeSet::new();
        for (mode, _) in rows {
            let name = mode.trim();
            if name.is_empty() {
                return Err(invalid("empty mode name"));
            }
            if !mode_names.insert(name) {
                return Err(invalid(format!("duplicate mode name '{name}'")));
            }
        }
        let map_names: BTreeSet<&str> = rows
            .iter()
            .flat_map(|(_, maps)| maps.iter().map(|m| m.trim()))
            .collect();

        let mode_ids: BTreeMap<&str, ModeId> = mode_names
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, ModeId(i as u32 + 1)))
            .collect();

        let modes = mode_ids
            .iter()
            .map(|(name, id)| GameMode {
                id: *id,
                name: (*name).to_string(),
                is_slayer: *name == SLAYER_MODE_NAME,
            })
            .collect();

        let maps = map_names
            .iter()
            .enumerate()
            .map(|(i, map_name)| MapInfo {
                id: MapId(i as u32 + 1),
                name: (*map_name).to_string(),
                modes: rows
                    .iter()
                    .filter(|(_, maps)| maps.iter().any(|m| m.trim() == *map_name))
                    .filter_map(|(mode, _)| mode_ids.get(mode.trim()).copied())
                    .collect(),
            })
            .collect();

        Self::new(modes, maps)
    }

    pub fn mode(&self, id: ModeId) -> Option<&GameMode> {
        self.modes.get(&id)
    }

    pub fn map(&self, id: MapId) -> Option<&MapInfo> {
        self.maps.get(&id)
    }

    pub fn slayer_mode(&self) -> &GameMode {
        // Presence is checked in `Catalog::new`.
        &self.modes[&self.slayer_mode]
    }

    /// Resolve a map/mode pair. `None` when either is unknown or the map does not
    /// support the mode.
    pub fn combo(&self, map_id: MapId, mode_id: ModeId) -> Option<Combo> {
        let map = self.maps.get(&map_id)?;
        let mode = self.modes.get(&mode_id)?;
        if !map.modes.contains(&mode_id) {
            return None;
        }
        Some(Combo {
            map_id,
            map: map.name.clone(),
            mode_id,
            mode: mode.name.clone(),
            family: mode.family(),
        })
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Game modes sorted by name.
    pub fn game_modes(&self) -> Vec<GameMode> {
        let mut modes: Vec<GameMode> = self.modes.values().cloned().collect();
        modes.sort_by(|a, b| a.name.cmp(&b.name));
        modes
    }

    /// Maps sorted by name, modes expanded and sorted by name.
    pub fn map_views(&self) -> Vec<MapView> {
        let mut maps: Vec<MapView> = self
            .maps
            .values()
            .map(|map| {
                let mut modes: Vec<ModeRef> = map
                    .modes
                    .iter()
                    .filter_map(|id| self.modes.get(id))
                    .map(|mode| ModeRef {
                        id: mode.id,
                        name: mode.name.clone(),
                    })
                    .collect();
                modes.sort_by(|a, b| a.name.cmp(&b.name));
                MapView {
                    id: map.id,
                    name: map.name.clone(),
                    modes,
                }
            })
            .collect();
        maps.sort_by(|a, b| a.name.cmp(&b.name));
        maps
    }

    fn admitted_pairs<'a>(
        &'a self,
        filter: &'a ComboFilter,
    ) -> impl Iterator<Item = (&'a MapInfo, &'a GameMode)> + 'a {
        self.maps.values().flat_map(move |map| {
            map.modes
                .iter()
                .filter_map(|id| self.modes.get(id))
                .filter(|mode| filter.admits(mode))
                .map(move |mode| (map, mode))
        })
    }

    /// Flat combo listing sorted by (mode name, map name).
    pub fn combos(&self, filter: &ComboFilter) -> Vec<ComboEntry> {
        let mut combos: Vec<ComboEntry> = self
            .admitted_pairs(filter)
            .map(|(map, mode)| ComboEntry {
                map_id: map.id,
                map: map.name.clone(),
                mode_id: mode.id,
                mode: mode.name.clone(),
                is_objective: !mode.is_slayer,
                slug: combo_slug(&map.name, &mode.name),
            })
            .collect();
        combos.sort_by(|a, b| (&a.mode, &a.map).cmp(&(&b.mode, &b.map)));
        combos
    }

    /// Combos grouped by family; objective groups sorted by mode name, maps by name.
    pub fn grouped(&self, filter: &ComboFilter) -> GroupedCombos {
        let mut groups: BTreeMap<ModeId, ModeGroup> = BTreeMap::new();
        let mut slayer = Vec::new();

        for (map, mode) in self.admitted_pairs(filter) {
            let entry = MapRef {
                map_id: map.id,
                map: map.name.clone(),
                slug: combo_slug(&map.name, &mode.name),
            };
            if mode.is_slayer {
                slayer.push(entry);
            } else {
                groups
                    .entry(mode.id)
                    .or_insert_with(|| ModeGroup {
                        mode_id: mode.id,
                        mode: mode.name.clone(),
                        combos: Vec::new(),
                    })
                    .combos
                    .push(entry);
            }
        }

        let mut objective: Vec<ModeGroup> = groups.into_values().collect();
        for group in &mut objective {
            group.combos.sort_by(|a, b| a.map.cmp(&b.map));
        }
        objective.sort_by(|a, b| a.mode.cmp(&b.mode));
        slayer.sort_by(|a, b| a.map.cmp(&b.map));

        GroupedCombos { objective, slayer }
    }
}

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed to one '-'.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub fn combo_slug(map: &str, mode: &str) -> String {
    format!("{}--{}", slugify(map), slugify(mode))
}
