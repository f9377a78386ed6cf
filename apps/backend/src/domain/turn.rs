//! Turn resolution: phase and next expected action as a pure function of series data.

use serde::Serialize;

use crate::domain::action_log::ActionLog;
use crate::domain::ban_schedule::{ban_quota, ban_turn};
use crate::domain::game_plan::{game_plan, GameSlot};
use crate::domain::types::{ActionKind, Family, Phase, Ruleset, SeriesType, Team};

/// What the draft expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnDescriptor {
    pub kind: ActionKind,
    pub team: Team,
    pub family: Family,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_number: Option<u8>,
}

/// Inputs the phase is derived from.
#[derive(Debug, Clone, Copy)]
pub struct DraftInputs<'a> {
    pub teams_assigned: bool,
    pub series_type: Option<SeriesType>,
    pub ruleset: Option<Ruleset>,
    pub actions: &'a ActionLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Idle,
    SeriesSetup,
    Ban(TurnDescriptor),
    Pick(TurnDescriptor),
    Complete,
}

impl Resolution {
    pub fn phase(&self) -> Phase {
        match self {
            Resolution::Idle => Phase::Idle,
            Resolution::SeriesSetup => Phase::SeriesSetup,
            Resolution::Ban(_) => Phase::BanPhase,
            Resolution::Pick(_) => Phase::PickWindow,
            Resolution::Complete => Phase::SeriesComplete,
        }
    }

    pub fn turn(&self) -> Option<TurnDescriptor> {
        match self {
            Resolution::Ban(turn) | Resolution::Pick(turn) => Some(*turn),
            _ => None,
        }
    }
}

/// First plan slot without a matching pick.
pub fn current_slot(series_type: SeriesType, actions: &ActionLog) -> Option<GameSlot> {
    game_plan(series_type)
        .into_iter()
        .find(|slot| actions.pick_for(slot.game_number).is_none())
}

pub fn resolve(inputs: DraftInputs<'_>) -> Resolution {
    if !inputs.teams_assigned {
        return Resolution::Idle;
    }
    let Some(series_type) = inputs.series_type else {
        return Resolution::SeriesSetup;
    };
    let ruleset = inputs.ruleset.unwrap_or_default();

    if let Some(ban) = ban_turn(ruleset, inputs.actions.ban_count()) {
        return Resolution::Ban(TurnDescriptor {
            kind: ActionKind::Ban,
            team: ban.team,
            family: ban.family,
            ban_number: Some(ban.ban_number),
            game_number: None,
        });
    }

    match current_slot(series_type, inputs.actions) {
        Some(slot) => Resolution::Pick(TurnDescriptor {
            kind: ActionKind::Pick,
            team: slot.picker,
            family: slot.game_type,
            ban_number: None,
            game_number: Some(slot.game_number),
        }),
        None => Resolution::Complete,
    }
}

/// Bans still owed before picking starts.
pub fn bans_remaining(ruleset: Ruleset, actions: &ActionLog) -> u8 {
    let done = u8::try_from(actions.ban_count()).unwrap_or(u8::MAX);
    ban_quota(ruleset).saturating_sub(done)
}
