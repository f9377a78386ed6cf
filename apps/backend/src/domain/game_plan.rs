//! Fixed per-series-type game schedule: slot type and picking team.

use serde::Serialize;

use crate::domain::types::{Family, SeriesType, Team};

/// Game types for the longest series; shorter series use a prefix.
const SLOT_TYPES: [Family; 7] = [
    Family::Objective,
    Family::Slayer,
    Family::Objective,
    Family::Objective,
    Family::Slayer,
    Family::Objective,
    Family::Slayer,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSlot {
    pub game_number: u8,
    pub game_type: Family,
    pub picker: Team,
}

/// Picker for a 1-based game number: B on odd games, A on even.
#[inline]
pub fn picker_for(game_number: u8) -> Team {
    if game_number % 2 == 1 {
        Team::B
    } else {
        Team::A
    }
}

pub fn game_plan(series_type: SeriesType) -> Vec<GameSlot> {
    (1..=series_type.games())
        .map(|game_number| GameSlot {
            game_number,
            game_type: SLOT_TYPES[usize::from(game_number - 1)],
            picker: picker_for(game_number),
        })
        .collect()
}
