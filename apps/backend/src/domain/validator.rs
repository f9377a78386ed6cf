//! Ban/pick validation against the resolved turn and the combo catalog.
//!
//! Checks run in a fixed order and stop at the first failure:
//! phase, team, combo existence (and ban family), consumption, distinct map (opt-in
//! ruleset only), pick family.

use crate::domain::catalog::{Catalog, Combo, ComboFilter};
use crate::domain::turn::{resolve, DraftInputs, Resolution, TurnDescriptor};
use crate::domain::types::{ActionKind, Family, MapId, ModeId, Ruleset, Team};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedAction {
    pub kind: ActionKind,
    pub team: Team,
    pub map_id: MapId,
    /// Omitted on slayer turns; the catalog's Slayer mode is implied.
    pub mode_id: Option<ModeId>,
}

/// A proposal that passed every check, ready to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAction {
    pub kind: ActionKind,
    pub team: Team,
    pub combo: Combo,
    pub step: Option<u8>,
}

fn expected_turn(
    resolution: Resolution,
    kind: ActionKind,
) -> Result<TurnDescriptor, DomainError> {
    match (kind, resolution) {
        (ActionKind::Ban, Resolution::Ban(turn)) | (ActionKind::Pick, Resolution::Pick(turn)) => {
            Ok(turn)
        }
        (ActionKind::Ban, other) => Err(DomainError::invalid_transition(format!(
            "Cannot ban during {}",
            other.phase()
        ))),
        (ActionKind::Pick, other) => Err(DomainError::invalid_transition(format!(
            "Cannot pick during {}",
            other.phase()
        ))),
    }
}

fn resolve_mode(
    catalog: &Catalog,
    turn: &TurnDescriptor,
    mode_id: Option<ModeId>,
) -> Result<ModeId, DomainError> {
    match (mode_id, turn.family) {
        (Some(id), _) => Ok(id),
        (None, Family::Slayer) => Ok(catalog.slayer_mode().id),
        (None, Family::Objective) => Err(DomainError::validation(
            ValidationKind::InvalidCombo,
            "mode_id is required for an objective combo",
        )),
    }
}

pub fn validate(
    inputs: DraftInputs<'_>,
    catalog: &Catalog,
    proposed: &ProposedAction,
) -> Result<ValidatedAction, DomainError> {
    let turn = expected_turn(resolve(inputs), proposed.kind)?;

    if proposed.team != turn.team {
        return Err(DomainError::validation(
            ValidationKind::WrongTurn,
            format!(
                "It is team {}'s turn to {}, not team {}",
                turn.team,
                proposed.kind.to_string().to_lowercase(),
                proposed.team
            ),
        ));
    }

    let mode_id = resolve_mode(catalog, &turn, proposed.mode_id)?;
    let combo = catalog.combo(proposed.map_id, mode_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidCombo,
            format!(
                "Map {} does not support mode {mode_id}",
                proposed.map_id
            ),
        )
    })?;

    if proposed.kind == ActionKind::Ban && combo.family != turn.family {
        return Err(DomainError::validation(
            ValidationKind::InvalidCombo,
            format!(
                "Ban {} must target a {} combo, got {} on {}",
                turn.ban_number.unwrap_or_default(),
                turn.family.as_str().to_lowercase(),
                combo.mode,
                combo.map
            ),
        ));
    }

    let actions = inputs.actions;
    if actions.is_consumed(combo.map_id, combo.mode_id) {
        return Err(DomainError::validation(
            ValidationKind::ComboUnavailable,
            format!("{} on {} is already banned or picked", combo.mode, combo.map),
        ));
    }

    if proposed.kind == ActionKind::Pick {
        let ruleset = inputs.ruleset.unwrap_or_default();
        if distinct_maps(ruleset)
            && actions.is_map_picked(combo.map_id)
            && fresh_map_available(catalog, inputs, turn.family)
        {
            return Err(DomainError::validation(
                ValidationKind::ComboUnavailable,
                format!("{} was already picked for an earlier game", combo.map),
            ));
        }

        if combo.family != turn.family {
            return Err(DomainError::validation(
                ValidationKind::TypeMismatch,
                format!(
                    "Game {} requires a {} combo, got {} on {}",
                    turn.game_number.unwrap_or_default(),
                    turn.family.as_str().to_lowercase(),
                    combo.mode,
                    combo.map
                ),
            ));
        }
    }

    Ok(ValidatedAction {
        kind: proposed.kind,
        team: proposed.team,
        combo,
        step: turn.game_number.filter(|_| proposed.kind == ActionKind::Pick),
    })
}

/// Whether picks should avoid maps already played in the series.
fn distinct_maps(ruleset: Ruleset) -> bool {
    match ruleset {
        Ruleset::Tsd8sV2 => false,
        Ruleset::Tsd8sV2UniqueMaps => true,
    }
}

/// An unconsumed combo of `family` exists on a map no game has used yet.
///
/// The distinct-map rule only binds while this holds, so it can never leave a pick slot
/// without a legal move.
fn fresh_map_available(catalog: &Catalog, inputs: DraftInputs<'_>, family: Family) -> bool {
    let actions = inputs.actions;
    catalog
        .combos(&ComboFilter::default())
        .iter()
        .filter(|c| c.is_objective == (family == Family::Objective))
        .any(|c| !actions.is_consumed(c.map_id, c.mode_id) && !actions.is_map_picked(c.map_id))
}
