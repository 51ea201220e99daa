//! Betting-relevant view of a seated player.

/// Snapshot of one player as the turn rules see it.
///
/// Built from the stored record by the repos layer; the domain never reads
/// names, rooms or cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub id: i64,
    pub position: i32,
    pub stack: i64,
    pub last_bet: i64,
    pub fold: bool,
    pub all_in: bool,
    pub make_turn: bool,
    pub is_current: bool,
}

impl Seat {
    /// Whether this player can still receive the turn.
    ///
    /// Folded and all-in players are out. A player with an empty stack
    /// stays in rotation only until they have acted once this round.
    pub fn can_act(&self) -> bool {
        !self.fold && !self.all_in && (self.stack > 0 || !self.make_turn)
    }
}
