use crate::domain::test_prelude::{all_in, folded, seat};
use crate::domain::turn_order::{select_next, NextTurn};
use crate::domain::Seat;
use crate::errors::domain::DomainError;

fn four_seats() -> Vec<Seat> {
    vec![seat(1, 100), seat(2, 100), seat(3, 100), seat(4, 100)]
}

#[test]
fn skips_folded_player() {
    let mut seats = four_seats();
    seats[2] = folded(seats[2]);
    assert_eq!(select_next(&seats, 2).unwrap(), NextTurn::Next(4));
}

#[test]
fn wraps_to_lowest_position() {
    let mut seats = four_seats();
    seats[2] = folded(seats[2]);
    seats[3] = folded(seats[3]);
    assert_eq!(select_next(&seats, 2).unwrap(), NextTurn::Next(1));
}

#[test]
fn input_order_does_not_matter() {
    let mut seats = four_seats();
    seats.reverse();
    assert_eq!(select_next(&seats, 4).unwrap(), NextTurn::Next(1));
}

#[test]
fn skips_all_in_and_exhausted_players() {
    let mut exhausted = seat(3, 0);
    exhausted.make_turn = true;
    let seats = vec![seat(1, 100), seat(2, 100), exhausted, all_in(seat(4, 0))];
    assert_eq!(select_next(&seats, 2).unwrap(), NextTurn::Next(1));
}

#[test]
fn empty_stack_player_who_has_not_acted_keeps_turn_rights() {
    let seats = vec![seat(1, 100), seat(2, 0)];
    assert_eq!(select_next(&seats, 1).unwrap(), NextTurn::Next(2));
}

#[test]
fn single_remaining_player_completes_hand() {
    let seats = vec![folded(seat(1, 100)), seat(2, 100)];
    assert_eq!(select_next(&seats, 1).unwrap(), NextTurn::HandComplete);
}

#[test]
fn nobody_else_able_to_act_completes_hand() {
    let seats = vec![seat(1, 100), all_in(seat(2, 0)), folded(seat(3, 100))];
    assert_eq!(select_next(&seats, 1).unwrap(), NextTurn::HandComplete);
}

#[test]
fn actor_is_never_selected() {
    let seats = vec![seat(1, 100), all_in(seat(2, 0))];
    assert_eq!(select_next(&seats, 1).unwrap(), NextTurn::HandComplete);
}

#[test]
fn duplicate_position_is_integrity_error() {
    let mut twin = seat(2, 100);
    twin.id = 99;
    let seats = vec![seat(1, 100), seat(2, 100), twin];
    let err = select_next(&seats, 1).unwrap_err();
    assert!(err.is_data_integrity());
    assert!(matches!(err, DomainError::Infra(_, _)));
}
