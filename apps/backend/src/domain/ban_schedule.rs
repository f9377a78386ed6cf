//! Ban cadence for the TSD_8s_v2 rulesets.
//!
//! Team B bans first and teams alternate strictly. The first five bans come from the
//! objective pool, the last two from the slayer pool. The quota does not depend on the
//! series type.

use serde::Serialize;

use crate::domain::types::{Family, Ruleset, Team};

pub const TSD_8S_V2_BANS: u8 = 7;
const TSD_8S_V2_OBJECTIVE_BANS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BanTurn {
    /// 1-based ban number.
    pub ban_number: u8,
    pub team: Team,
    pub family: Family,
}

pub fn ban_quota(ruleset: Ruleset) -> u8 {
    match ruleset {
        Ruleset::Tsd8sV2 | Ruleset::Tsd8sV2UniqueMaps => TSD_8S_V2_BANS,
    }
}

/// The ban due after `bans_so_far` bans, or `None` once the quota is met.
pub fn ban_turn(ruleset: Ruleset, bans_so_far: usize) -> Option<BanTurn> {
    let quota = ban_quota(ruleset);
    let ban_number = u8::try_from(bans_so_far + 1).ok()?;
    if ban_number > quota {
        return None;
    }
    let team = if ban_number % 2 == 1 { Team::B } else { Team::A };
    let family = match ruleset {
        Ruleset::Tsd8sV2 | Ruleset::Tsd8sV2UniqueMaps => {
            if ban_number <= TSD_8S_V2_OBJECTIVE_BANS {
                Family::Objective
            } else {
                Family::Slayer
            }
        }
    };
    Some(BanTurn {
        ban_number,
        team,
        family,
    })
}
