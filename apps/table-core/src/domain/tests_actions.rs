use crate::domain::actions::{apply_action, Action, TurnAction};
use crate::domain::test_prelude::{all_in, current, folded, seat};
use crate::errors::domain::{DomainError, ValidationKind};

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn call_moves_chips_from_stack_to_bet() {
    let actor = current(seat(1, 1000));
    let delta = apply_action(&actor, Action::Call(200)).unwrap();
    assert_eq!(delta.stack, 800);
    assert_eq!(delta.last_bet, 200);
    assert!(delta.make_turn);
    assert!(!delta.all_in);
    assert!(!delta.fold);
    assert_eq!(delta.committed(&actor), 200);
}

#[test]
fn call_larger_than_stack_is_insufficient() {
    let actor = current(seat(1, 50));
    let err = apply_action(&actor, Action::Call(200)).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InsufficientStack);
}

#[test]
fn call_for_exact_stack_flags_all_in() {
    let actor = current(seat(1, 200));
    let delta = apply_action(&actor, Action::Raise(200)).unwrap();
    assert_eq!(delta.stack, 0);
    assert!(delta.all_in);
}

#[test]
fn all_in_commits_whole_stack() {
    let mut actor = current(seat(1, 50));
    actor.last_bet = 10;
    let delta = apply_action(&actor, Action::AllIn).unwrap();
    assert_eq!(delta.stack, 0);
    assert_eq!(delta.last_bet, 60);
    assert!(delta.all_in);
    assert!(delta.make_turn);
}

#[test]
fn all_in_with_empty_stack_is_invalid() {
    let actor = current(seat(1, 0));
    let err = apply_action(&actor, Action::AllIn).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidAction);
}

#[test]
fn fold_sets_flags_and_keeps_chips() {
    let actor = current(seat(1, 300));
    let delta = apply_action(&actor, Action::Fold).unwrap();
    assert!(delta.fold);
    assert!(delta.make_turn);
    assert_eq!(delta.stack, 300);
    assert_eq!(delta.last_bet, 0);
}

#[test]
fn folding_twice_is_invalid() {
    let actor = current(folded(seat(1, 300)));
    let err = apply_action(&actor, Action::Fold).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidAction);
}

#[test]
fn betting_after_all_in_or_fold_is_invalid() {
    let shoved = current(all_in(seat(1, 0)));
    assert_eq!(
        kind_of(apply_action(&shoved, Action::Call(0)).unwrap_err()),
        ValidationKind::InvalidAction
    );

    let gone = current(folded(seat(2, 100)));
    assert_eq!(
        kind_of(apply_action(&gone, Action::Raise(10)).unwrap_err()),
        ValidationKind::InvalidAction
    );
}

#[test]
fn negative_amount_is_invalid() {
    let actor = current(seat(1, 100));
    let err = apply_action(&actor, Action::Call(-5)).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidAction);
}

#[test]
fn non_current_player_is_rejected_first() {
    // Even an otherwise invalid action reports the turn violation.
    let actor = folded(seat(1, 100));
    let err = apply_action(&actor, Action::Fold).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::NotYourTurn);
}

#[test]
fn call_resolves_against_top_bet() {
    let mut actor = seat(1, 1000);
    actor.last_bet = 50;
    assert_eq!(TurnAction::Call.resolve(&actor, 200).unwrap(), Action::Call(150));
    // Already matching the top bet: a check.
    assert_eq!(TurnAction::Call.resolve(&actor, 50).unwrap(), Action::Call(0));
}

#[test]
fn raise_adds_on_top_of_call() {
    let mut actor = seat(1, 1000);
    actor.last_bet = 50;
    assert_eq!(
        TurnAction::Raise { by: 100 }.resolve(&actor, 200).unwrap(),
        Action::Raise(250)
    );

    let err = TurnAction::Raise { by: 0 }.resolve(&actor, 200).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidAction);
}

#[test]
fn zero_check_on_empty_stack_is_not_all_in() {
    let actor = current(seat(1, 0));
    let delta = apply_action(&actor, Action::Call(0)).unwrap();
    assert_eq!(delta.stack, 0);
    assert_eq!(delta.last_bet, 0);
    assert!(!delta.all_in);
    assert!(delta.make_turn);
    assert_eq!(delta.committed(&actor), 0);
}
