use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Map identifier within the combo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(pub u32);

/// Game mode identifier within the combo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    #[inline]
    pub fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game-mode family. Slayer combos use only the Slayer mode; everything else is objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Family {
    Objective,
    Slayer,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Objective => "OBJECTIVE",
            Family::Slayer => "SLAYER",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "objective" => Ok(Family::Objective),
            "slayer" => Ok(Family::Slayer),
            other => Err(DomainError::validation(
                ValidationKind::Other("INVALID_FAMILY".into()),
                format!("Unknown combo type '{other}' (expected objective or slayer)"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Ban,
    Pick,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Ban => f.write_str("BAN"),
            ActionKind::Pick => f.write_str("PICK"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesType {
    Bo3,
    Bo5,
    Bo7,
}

impl SeriesType {
    pub const ALL: [SeriesType; 3] = [SeriesType::Bo3, SeriesType::Bo5, SeriesType::Bo7];

    /// Number of games in the series.
    pub fn games(self) -> u8 {
        match self {
            SeriesType::Bo3 => 3,
            SeriesType::Bo5 => 5,
            SeriesType::Bo7 => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeriesType::Bo3 => "Bo3",
            SeriesType::Bo5 => "Bo5",
            SeriesType::Bo7 => "Bo7",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Bo3" => Ok(SeriesType::Bo3),
            "Bo5" => Ok(SeriesType::Bo5),
            "Bo7" => Ok(SeriesType::Bo7),
            other => Err(DomainError::validation(
                ValidationKind::InvalidSeriesType,
                format!("Invalid series_type '{other}' (expected Bo3, Bo5 or Bo7)"),
            )),
        }
    }
}

/// Draft lifecycle phase. Always derived from series data, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Teams not yet assigned.
    Idle,
    /// Teams assigned, waiting for the series type.
    SeriesSetup,
    /// Bans are being collected.
    BanPhase,
    /// Games are being picked one slot at a time.
    PickWindow,
    /// Every game slot has a pick.
    SeriesComplete,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::SeriesSetup => "SERIES_SETUP",
            Phase::BanPhase => "BAN_PHASE",
            Phase::PickWindow => "PICK_WINDOW",
            Phase::SeriesComplete => "SERIES_COMPLETE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft ruleset tag recorded when the series type is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruleset {
    /// 8s ruleset: seven bans (B first, strictly alternating; five objective then two
    /// slayer). Picks only have to avoid consumed combos.
    #[default]
    #[serde(rename = "TSD_8s_v2")]
    Tsd8sV2,
    /// Same bans as `Tsd8sV2`, but a pick must use a map not yet played while the slot's
    /// family still has an open combo on a fresh map.
    #[serde(rename = "TSD_8s_v2_unique_maps")]
    Tsd8sV2UniqueMaps,
}

impl Ruleset {
    pub fn as_str(self) -> &'static str {
        match self {
            Ruleset::Tsd8sV2 => "TSD_8s_v2",
            Ruleset::Tsd8sV2UniqueMaps => "TSD_8s_v2_unique_maps",
        }
    }
}

impl FromStr for Ruleset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TSD_8s_v2" => Ok(Ruleset::Tsd8sV2),
            "TSD_8s_v2_unique_maps" => Ok(Ruleset::Tsd8sV2UniqueMaps),
            other => Err(DomainError::validation(
                ValidationKind::Other("INVALID_RULESET".into()),
                format!("Unknown ruleset '{other}'"),
            )),
        }
    }
}
