//! Property tests for action application (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::actions::{apply_action, Action};
use crate::domain::test_prelude::{self, current, seat};
use crate::errors::domain::{DomainError, ValidationKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Chips are conserved: what leaves the stack lands on the bet.
    #[test]
    fn prop_call_conserves_chips(stack in 0i64..10_000, amount in 0i64..10_000, prior in 0i64..1_000) {
        let mut actor = current(seat(1, stack));
        actor.last_bet = prior;
        match apply_action(&actor, Action::Call(amount)) {
            Ok(delta) => {
                prop_assert!(delta.stack >= 0);
                prop_assert_eq!(delta.stack + delta.last_bet, stack + prior);
                prop_assert_eq!(delta.all_in, amount > 0 && delta.stack == 0);
            }
            Err(DomainError::Validation(ValidationKind::InsufficientStack, _)) => {
                prop_assert!(amount > stack);
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    /// A player without the turn never gets a delta.
    #[test]
    fn prop_non_current_never_mutates(stack in 0i64..10_000, amount in 0i64..10_000) {
        let actor = seat(1, stack);
        for action in [Action::Fold, Action::Call(amount), Action::Raise(amount), Action::AllIn] {
            let err = apply_action(&actor, action).unwrap_err();
            prop_assert!(matches!(err, DomainError::Validation(ValidationKind::NotYourTurn, _)));
        }
    }
}
