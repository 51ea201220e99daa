//! Property tests for turn selection (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::test_prelude;
use crate::domain::turn_order::{select_next, NextTurn};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The chosen player is never the actor, never folded, and can act.
    #[test]
    fn prop_next_player_is_eligible(
        seats in test_prelude::table(),
        pick in any::<prop::sample::Index>(),
    ) {
        let actor = seats[pick.index(seats.len())];
        match select_next(&seats, actor.position).unwrap() {
            NextTurn::Next(id) => {
                let chosen = seats.iter().find(|s| s.id == id).unwrap();
                prop_assert_ne!(chosen.position, actor.position);
                prop_assert!(!chosen.fold);
                prop_assert!(chosen.can_act());
            }
            NextTurn::HandComplete => {
                let in_hand = seats.iter().filter(|s| !s.fold).count();
                let others_can_act = seats
                    .iter()
                    .any(|s| s.position != actor.position && s.can_act());
                prop_assert!(in_hand < 2 || !others_can_act);
            }
        }
    }

    /// No eligible player sits strictly between the actor and the chosen one.
    #[test]
    fn prop_next_player_is_nearest_clockwise(
        seats in test_prelude::table(),
        pick in any::<prop::sample::Index>(),
    ) {
        let actor = seats[pick.index(seats.len())];
        if let NextTurn::Next(id) = select_next(&seats, actor.position).unwrap() {
            let chosen = seats.iter().find(|s| s.id == id).unwrap();
            let distance = |p: i32| (p - actor.position).rem_euclid(20);
            for s in seats.iter().filter(|s| s.can_act() && s.position != actor.position) {
                prop_assert!(distance(s.position) >= distance(chosen.position));
            }
        }
    }
}
