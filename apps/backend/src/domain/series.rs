//! Series aggregate and draft state machine.
//!
//! The phase is never stored: every read recomputes it from the team names, the series
//! type and the action log. Mutations validate fully before touching any field, so a
//! failed event leaves the series unchanged.

use time::OffsetDateTime;
use unicode_normalization::UnicodeNormalization;

use crate::domain::action_log::{Action, ActionLog};
use crate::domain::catalog::Catalog;
use crate::domain::turn::{resolve, DraftInputs, Resolution, TurnDescriptor};
use crate::domain::types::{ActionKind, MapId, ModeId, Phase, Ruleset, SeriesType, Team};
use crate::domain::validator::{validate, ProposedAction};
use crate::errors::domain::{DomainError, ValidationKind};

pub type SeriesId = i64;

pub const MAX_TEAM_NAME_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: SeriesId,
    team_a: String,
    team_b: String,
    series_type: Option<SeriesType>,
    ruleset: Option<Ruleset>,
    actions: ActionLog,
    created_at: OffsetDateTime,
    version: u32,
}

/// Trim and NFC-normalize a team name or label.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect()
}

fn validate_team_name(which: &str, name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeamName,
            format!("{which} must not be empty"),
        ));
    }
    if name.eq_ignore_ascii_case("A") || name.eq_ignore_ascii_case("B") {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeamName,
            format!("{which} must not be the team code A or B"),
        ));
    }
    if name.chars().count() > MAX_TEAM_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeamName,
            format!("{which} must be at most {MAX_TEAM_NAME_CHARS} characters"),
        ));
    }
    Ok(())
}

impl Series {
    pub fn new(id: SeriesId, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            team_a: String::new(),
            team_b: String::new(),
            series_type: None,
            ruleset: None,
            actions: ActionLog::new(),
            created_at,
            version: 0,
        }
    }

    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn team_a(&self) -> &str {
        &self.team_a
    }

    pub fn team_b(&self) -> &str {
        &self.team_b
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn series_type(&self) -> Option<SeriesType> {
        self.series_type
    }

    pub fn ruleset(&self) -> Option<Ruleset> {
        self.ruleset
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Incremented on every successful mutation.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn inputs(&self) -> DraftInputs<'_> {
        DraftInputs {
            teams_assigned: !self.team_a.is_empty() && !self.team_b.is_empty(),
            series_type: self.series_type,
            ruleset: self.ruleset,
            actions: &self.actions,
        }
    }

    pub fn resolution(&self) -> Resolution {
        resolve(self.inputs())
    }

    pub fn phase(&self) -> Phase {
        self.resolution().phase()
    }

    pub fn turn(&self) -> Option<TurnDescriptor> {
        self.resolution().turn()
    }

    fn require_phase(&self, allowed: &[Phase], event: &str) -> Result<Phase, DomainError> {
        let phase = self.phase();
        if allowed.contains(&phase) {
            Ok(phase)
        } else {
            Err(DomainError::invalid_transition(format!(
                "Cannot {event} during {phase}"
            )))
        }
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn assign_teams(&mut self, team_a: &str, team_b: &str) -> Result<(), DomainError> {
        self.require_phase(&[Phase::Idle], "assign teams")?;

        let a = normalize_name(team_a);
        let b = normalize_name(team_b);
        validate_team_name("team_a", &a)?;
        validate_team_name("team_b", &b)?;
        if a.to_lowercase() == b.to_lowercase() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeamName,
                "team_a and team_b must be different",
            ));
        }

        self.team_a = a;
        self.team_b = b;
        self.bump();
        Ok(())
    }

    pub fn confirm_series_type(
        &mut self,
        series_type: SeriesType,
        ruleset: Option<Ruleset>,
    ) -> Result<(), DomainError> {
        self.require_phase(&[Phase::SeriesSetup], "confirm the series type")?;
        self.series_type = Some(series_type);
        self.ruleset = Some(ruleset.unwrap_or_default());
        self.bump();
        Ok(())
    }

    /// Validate and append a ban or pick.
    pub fn apply(
        &mut self,
        catalog: &Catalog,
        proposed: &ProposedAction,
    ) -> Result<&Action, DomainError> {
        let validated = validate(self.inputs(), catalog, proposed)?;
        self.bump();
        Ok(self.actions.append(
            validated.kind,
            validated.team,
            validated.combo,
            validated.step,
        ))
    }

    pub fn ban(
        &mut self,
        catalog: &Catalog,
        team: Team,
        map_id: MapId,
        mode_id: Option<ModeId>,
    ) -> Result<&Action, DomainError> {
        self.apply(
            catalog,
            &ProposedAction {
                kind: ActionKind::Ban,
                team,
                map_id,
                mode_id,
            },
        )
    }

    pub fn pick(
        &mut self,
        catalog: &Catalog,
        team: Team,
        map_id: MapId,
        mode_id: Option<ModeId>,
    ) -> Result<&Action, DomainError> {
        self.apply(
            catalog,
            &ProposedAction {
                kind: ActionKind::Pick,
                team,
                map_id,
                mode_id,
            },
        )
    }

    /// Remove the most recent action. The phase follows from what remains.
    pub fn undo(&mut self) -> Result<Action, DomainError> {
        self.require_phase(&[Phase::BanPhase, Phase::PickWindow], "undo")?;
        let removed = self.actions.pop_last().ok_or_else(|| {
            DomainError::validation(ValidationKind::EmptyHistory, "Nothing to undo")
        })?;
        self.bump();
        Ok(removed)
    }

    /// Clear teams, series type, ruleset and history. The id and creation time survive.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.require_phase(
            &[
                Phase::SeriesSetup,
                Phase::BanPhase,
                Phase::PickWindow,
                Phase::SeriesComplete,
            ],
            "reset",
        )?;
        self.team_a.clear();
        self.team_b.clear();
        self.series_type = None;
        self.ruleset = None;
        self.actions.clear();
        self.bump();
        Ok(())
    }

    /// Resolve a team label: "A"/"B" (any case) or an assigned team name.
    pub fn team_for_label(&self, label: &str) -> Result<Team, DomainError> {
        let label = normalize_name(label);
        if label.eq_ignore_ascii_case("A") {
            return Ok(Team::A);
        }
        if label.eq_ignore_ascii_case("B") {
            return Ok(Team::B);
        }
        if !label.is_empty() && label == self.team_a {
            return Ok(Team::A);
        }
        if !label.is_empty() && label == self.team_b {
            return Ok(Team::B);
        }
        Err(DomainError::validation(
            ValidationKind::UnknownTeam,
            format!("Unknown team '{label}' (expected A, B or a team name)"),
        ))
    }
}
