// Shared helpers for domain unit and property tests.

use std::env;

use proptest::prelude::*;

use crate::domain::Seat;

pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Active seat with id == position, not current.
pub fn seat(position: i32, stack: i64) -> Seat {
    Seat {
        id: i64::from(position),
        position,
        stack,
        last_bet: 0,
        fold: false,
        all_in: false,
        make_turn: false,
        is_current: false,
    }
}

pub fn current(mut s: Seat) -> Seat {
    s.is_current = true;
    s
}

pub fn folded(mut s: Seat) -> Seat {
    s.fold = true;
    s
}

pub fn all_in(mut s: Seat) -> Seat {
    s.all_in = true;
    s.stack = 0;
    s
}

/// Generate a table of 2..=9 seats with unique positions.
pub fn table() -> impl Strategy<Value = Vec<Seat>> {
    prop::collection::btree_set(0i32..20, 2..=9).prop_flat_map(|positions| {
        let positions: Vec<i32> = positions.into_iter().collect();
        let n = positions.len();
        (
            Just(positions),
            prop::collection::vec((0i64..500, any::<bool>(), any::<bool>(), any::<bool>()), n),
        )
            .prop_map(|(positions, attrs)| {
                positions
                    .into_iter()
                    .zip(attrs)
                    .map(|(position, (stack, fold, all_in, make_turn))| Seat {
                        id: i64::from(position) + 100,
                        position,
                        stack: if all_in { 0 } else { stack },
                        last_bet: 0,
                        fold,
                        all_in,
                        make_turn,
                        is_current: false,
                    })
                    .collect()
            })
    })
}
