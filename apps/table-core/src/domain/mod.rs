//! Domain layer: pure turn and betting rules.

pub mod actions;
pub mod seat;
pub mod turn_order;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_actions;
#[cfg(test)]
mod tests_props_actions;
#[cfg(test)]
mod tests_props_turn_order;
#[cfg(test)]
mod tests_turn_order;

// Re-exports for ergonomics
pub use actions::{apply_action, ensure_turn, Action, PlayerDelta, TurnAction};
pub use seat::Seat;
pub use turn_order::{select_next, NextTurn};
