/// Property-based tests for draft invariants over random legal event sequences
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::game_plan::game_plan;
use crate::domain::test_prelude::{
    self, drive_to_completion, legal_actions, series_in_setup, small_catalog,
};
use crate::domain::turn::resolve;
use crate::domain::types::{Phase, Ruleset, SeriesType, Team};
use crate::domain::Series;

fn series_type() -> impl Strategy<Value = SeriesType> {
    prop_oneof![
        Just(SeriesType::Bo3),
        Just(SeriesType::Bo5),
        Just(SeriesType::Bo7)
    ]
}

fn ruleset() -> impl Strategy<Value = Ruleset> {
    prop_oneof![Just(Ruleset::Tsd8sV2), Just(Ruleset::Tsd8sV2UniqueMaps)]
}

/// Apply `choices` as a random walk: 0 undoes, anything else picks a legal action.
fn walk(series_type: SeriesType, choices: &[u16]) -> Series {
    walk_with(series_type, Ruleset::Tsd8sV2, choices)
}

fn walk_with(series_type: SeriesType, ruleset: Ruleset, choices: &[u16]) -> Series {
    let catalog = small_catalog();
    let mut series = series_in_setup();
    series
        .confirm_series_type(series_type, Some(ruleset))
        .expect("confirm series type");
    for &choice in choices {
        if choice == 0 {
            let _ = series.undo();
            continue;
        }
        let legal = legal_actions(&series, &catalog);
        if legal.is_empty() {
            break;
        }
        let next = legal[usize::from(choice) % legal.len()];
        series.apply(&catalog, &next).expect("legal action applies");
    }
    series
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: No combo is consumed twice, under either ruleset.
    #[test]
    fn prop_no_double_consumption(
        st in series_type(),
        rs in ruleset(),
        choices in prop::collection::vec(0u16..64, 0..40),
    ) {
        let series = walk_with(st, rs, &choices);
        let mut combos = HashSet::new();
        for action in series.actions().as_slice() {
            prop_assert!(combos.insert((action.map_id, action.mode_id)),
                "combo {:?} consumed twice", (action.map_id, action.mode_id));
        }
    }

    /// Property: Any reachable draft can still be played to SERIES_COMPLETE.
    #[test]
    fn prop_no_dead_end(
        st in series_type(),
        rs in ruleset(),
        choices in prop::collection::vec(1u16..64, 0..40),
    ) {
        let catalog = small_catalog();
        let mut series = walk_with(st, rs, &choices);
        drive_to_completion(&mut series, &catalog);
        prop_assert_eq!(series.phase(), Phase::SeriesComplete);
        prop_assert_eq!(series.actions().picks().count(), game_plan(st).len());
    }

    /// Property: Bans alternate starting with B; every pick matches its slot's picker and type.
    #[test]
    fn prop_turn_alternation(
        st in series_type(),
        choices in prop::collection::vec(1u16..64, 0..40),
    ) {
        let series = walk(st, &choices);
        let plan = game_plan(st);

        let bans: Vec<Team> = series.actions().bans().map(|a| a.team).collect();
        for (i, team) in bans.iter().enumerate() {
            let expected = if i % 2 == 0 { Team::B } else { Team::A };
            prop_assert_eq!(*team, expected);
        }

        for pick in series.actions().picks() {
            let step = pick.step.expect("picks carry a step");
            let slot = plan[usize::from(step) - 1];
            prop_assert_eq!(pick.team, slot.picker);
            prop_assert_eq!(pick.family, slot.game_type);
        }

        for (i, action) in series.actions().as_slice().iter().enumerate() {
            prop_assert_eq!(action.sequence as usize, i + 1);
        }
    }

    /// Property: Phase and turn are a deterministic function of the series data.
    #[test]
    fn prop_resolution_is_deterministic(
        st in series_type(),
        choices in prop::collection::vec(0u16..64, 0..40),
    ) {
        let series = walk(st, &choices);
        let first = resolve(series.inputs());
        let copy = series.clone();
        prop_assert_eq!(first, resolve(series.inputs()));
        prop_assert_eq!(first, copy.resolution());
    }

    /// Property: Applying a legal event and undoing it restores phase and history.
    /// The final pick is terminal: undo is refused there and nothing changes.
    #[test]
    fn prop_apply_then_undo_restores(
        st in series_type(),
        choices in prop::collection::vec(1u16..64, 0..20),
        pick in any::<u16>(),
    ) {
        let catalog = small_catalog();
        let mut series = walk(st, &choices);
        let legal = legal_actions(&series, &catalog);
        prop_assume!(!legal.is_empty());

        let before = series.clone();
        series.apply(&catalog, &legal[usize::from(pick) % legal.len()]).unwrap();

        if series.phase() == Phase::SeriesComplete {
            let done = series.clone();
            prop_assert!(series.undo().is_err());
            prop_assert_eq!(&series, &done);
            return Ok(());
        }
        series.undo().unwrap();

        prop_assert_eq!(series.phase(), before.phase());
        prop_assert_eq!(series.actions(), before.actions());
        prop_assert_eq!(series.turn(), before.turn());
    }

    /// Property: Reset always lands in IDLE with an empty log.
    #[test]
    fn prop_reset_totality(
        st in series_type(),
        choices in prop::collection::vec(0u16..64, 0..40),
    ) {
        let mut series = walk(st, &choices);
        series.reset().unwrap();
        prop_assert_eq!(series.phase(), Phase::Idle);
        prop_assert!(series.actions().is_empty());
    }
}
