//! Ordered draft history. Append on a validated event, pop the last on undo, clear on reset.

use serde::Serialize;

use crate::domain::catalog::Combo;
use crate::domain::types::{ActionKind, Family, MapId, ModeId, Team};

/// One recorded ban or pick. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// 1-based position in the log.
    pub sequence: u32,
    pub kind: ActionKind,
    pub team: Team,
    pub map_id: MapId,
    pub map: String,
    pub mode_id: ModeId,
    pub mode: String,
    pub family: Family,
    /// Game number this pick fills. Bans are not tied to a slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u8>,
}

impl Action {
    pub fn is_ban(&self) -> bool {
        self.kind == ActionKind::Ban
    }

    pub fn is_pick(&self) -> bool {
        self.kind == ActionKind::Pick
    }

    pub fn targets(&self, map_id: MapId, mode_id: ModeId) -> bool {
        self.map_id == map_id && self.mode_id == mode_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn bans(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.is_ban())
    }

    pub fn picks(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.is_pick())
    }

    pub fn ban_count(&self) -> usize {
        self.bans().count()
    }

    /// The pick that resolved game `step`, if any.
    pub fn pick_for(&self, step: u8) -> Option<&Action> {
        self.picks().find(|a| a.step == Some(step))
    }

    /// True when any ban or pick already targets this combo.
    pub fn is_consumed(&self, map_id: MapId, mode_id: ModeId) -> bool {
        self.actions.iter().any(|a| a.targets(map_id, mode_id))
    }

    /// True when the map was already picked for some game, in any mode.
    pub fn is_map_picked(&self, map_id: MapId) -> bool {
        self.picks().any(|a| a.map_id == map_id)
    }

    pub(crate) fn append(
        &mut self,
        kind: ActionKind,
        team: Team,
        combo: Combo,
        step: Option<u8>,
    ) -> &Action {
        let sequence = self.actions.len() as u32 + 1;
        self.actions.push(Action {
            sequence,
            kind,
            team,
            map_id: combo.map_id,
            map: combo.map,
            mode_id: combo.mode_id,
            mode: combo.mode,
            family: combo.family,
            step,
        });
        &self.actions[self.actions.len() - 1]
    }

    pub(crate) fn pop_last(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.actions.clear();
    }
}
