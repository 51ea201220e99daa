//! Turn order: who receives the turn after a player acts.

use crate::domain::seat::Seat;
use crate::errors::domain::DomainError;

/// Result of advancing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTurn {
    /// This player id becomes current.
    Next(i64),
    /// Nobody else can act; the hand is over and no one holds the turn.
    HandComplete,
}

/// Choose the next player after the one seated at `acting_position`.
///
/// `seats` is the room as it stands after the action was applied (folded
/// players may be included; they are skipped). Scans positions strictly
/// after `acting_position` in ascending order, wrapping to the lowest, and
/// picks the first player who can still act. The actor is never chosen.
///
/// Fewer than two non-folded players, or no candidate, is `HandComplete`.
/// A repeated position is a data-integrity error.
pub fn select_next(seats: &[Seat], acting_position: i32) -> Result<NextTurn, DomainError> {
    let mut ordered: Vec<&Seat> = seats.iter().collect();
    ordered.sort_by_key(|s| s.position);

    if let Some(pair) = ordered.windows(2).find(|w| w[0].position == w[1].position) {
        return Err(DomainError::data_integrity(format!(
            "Players #{} and #{} share position {}",
            pair[0].id, pair[1].id, pair[0].position
        )));
    }

    let in_hand = ordered.iter().filter(|s| !s.fold).count();
    if in_hand < 2 {
        return Ok(NextTurn::HandComplete);
    }

    let (before, after): (Vec<&Seat>, Vec<&Seat>) = ordered
        .into_iter()
        .filter(|s| s.position != acting_position)
        .partition(|s| s.position < acting_position);

    let next = after
        .into_iter()
        .chain(before)
        .find(|s| s.can_act())
        .map(|s| s.id);

    Ok(match next {
        Some(id) => NextTurn::Next(id),
        None => NextTurn::HandComplete,
    })
}
