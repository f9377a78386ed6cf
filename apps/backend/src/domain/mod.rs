//! Domain layer: pure draft logic types and helpers.

pub mod action_log;
pub mod ban_schedule;
pub mod catalog;
pub mod game_plan;
pub mod series;
pub mod snapshot;
pub mod turn;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests_props_draft;

// Re-exports for ergonomics
pub use action_log::{Action, ActionLog};
pub use catalog::{Catalog, Combo, ComboFilter, GameMode, GroupedCombos, MapInfo};
pub use series::{Series, SeriesId};
pub use snapshot::{SeriesSummary, SeriesView};
pub use turn::{Resolution, TurnDescriptor};
pub use types::{ActionKind, Family, MapId, ModeId, Phase, Ruleset, SeriesType, Team};
