//! Read-only projections of a series, handed to callers after every operation.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::action_log::Action;
use crate::domain::ban_schedule::ban_quota;
use crate::domain::game_plan::game_plan;
use crate::domain::series::{Series, SeriesId};
use crate::domain::turn::{bans_remaining, TurnDescriptor};
use crate::domain::types::{Family, MapId, ModeId, Phase, Ruleset, SeriesType, Team};

/// Next expected action with the acting team's display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NextTurn {
    #[serde(flatten)]
    pub turn: TurnDescriptor,
    pub team_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickedCombo {
    pub map_id: MapId,
    pub map: String,
    pub mode_id: ModeId,
    pub mode: String,
    pub sequence: u32,
}

/// One plan slot with its pick, once made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_number: u8,
    pub game_type: Family,
    pub picker: Team,
    pub picker_name: String,
    pub pick: Option<PickedCombo>,
}

/// Full series projection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesView {
    pub id: SeriesId,
    pub team_a: String,
    pub team_b: String,
    pub series_type: Option<SeriesType>,
    pub ruleset: Option<Ruleset>,
    pub phase: Phase,
    pub version: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub actions: Vec<Action>,
    pub next_turn: Option<NextTurn>,
    pub bans_total: u8,
    pub bans_remaining: u8,
    pub games: Vec<GameView>,
}

/// Listing entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub id: SeriesId,
    pub team_a: String,
    pub team_b: String,
    pub series_type: Option<SeriesType>,
    pub phase: Phase,
    pub actions: usize,
    pub version: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SeriesView {
    pub fn of(series: &Series) -> Self {
        let resolution = series.resolution();
        let actions = series.actions();

        let next_turn = resolution.turn().map(|turn| NextTurn {
            turn,
            team_name: series.team_name(turn.team).to_string(),
        });

        let (bans_total, remaining) = match series.series_type() {
            Some(_) => {
                let ruleset = series.ruleset().unwrap_or_default();
                (ban_quota(ruleset), bans_remaining(ruleset, actions))
            }
            None => (0, 0),
        };

        let games = series
            .series_type()
            .map(game_plan)
            .unwrap_or_default()
            .into_iter()
            .map(|slot| GameView {
                game_number: slot.game_number,
                game_type: slot.game_type,
                picker: slot.picker,
                picker_name: series.team_name(slot.picker).to_string(),
                pick: actions.pick_for(slot.game_number).map(|a| PickedCombo {
                    map_id: a.map_id,
                    map: a.map.clone(),
                    mode_id: a.mode_id,
                    mode: a.mode.clone(),
                    sequence: a.sequence,
                }),
            })
            .collect();

        Self {
            id: series.id(),
            team_a: series.team_a().to_string(),
            team_b: series.team_b().to_string(),
            series_type: series.series_type(),
            ruleset: series.ruleset(),
            phase: resolution.phase(),
            version: series.version(),
            created_at: series.created_at(),
            actions: actions.as_slice().to_vec(),
            next_turn,
            bans_total,
            bans_remaining: remaining,
            games,
        }
    }
}

impl SeriesSummary {
    pub fn of(series: &Series) -> Self {
        Self {
            id: series.id(),
            team_a: series.team_a().to_string(),
            team_b: series.team_b().to_string(),
            series_type: series.series_type(),
            phase: series.phase(),
            actions: series.actions().len(),
            version: series.version(),
            created_at: series.created_at(),
        }
    }
}
