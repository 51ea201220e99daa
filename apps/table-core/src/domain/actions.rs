//! Action application: pure stack/bet bookkeeping for one player action.

use crate::domain::seat::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// Action with the amount already resolved against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    /// Commit exactly this many chips to match the top bet.
    Call(i64),
    /// Commit this many chips, more than the call amount.
    Raise(i64),
    AllIn,
}

/// Action as requested by the game flow.
///
/// Amounts are derived from the room's top bet rather than trusted from the
/// caller, see [`TurnAction::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    Fold,
    Call,
    /// Match the top bet, then add `by` on top.
    Raise { by: i64 },
    AllIn,
}

impl TurnAction {
    /// Resolve into a concrete [`Action`] given the room's top bet.
    pub fn resolve(self, actor: &Seat, top_bet: i64) -> Result<Action, DomainError> {
        let to_call = top_bet.saturating_sub(actor.last_bet).max(0);
        match self {
            TurnAction::Fold => Ok(Action::Fold),
            TurnAction::AllIn => Ok(Action::AllIn),
            TurnAction::Call => Ok(Action::Call(to_call)),
            TurnAction::Raise { by } => {
                if by <= 0 {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidAction,
                        format!("Raise must be positive, got {by}"),
                    ));
                }
                let amount = to_call.checked_add(by).ok_or_else(|| {
                    DomainError::validation(ValidationKind::InvalidAction, "Raise amount overflow")
                })?;
                Ok(Action::Raise(amount))
            }
        }
    }
}

/// Resulting betting fields after an action. Always the full new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDelta {
    pub stack: i64,
    pub last_bet: i64,
    pub fold: bool,
    pub all_in: bool,
    pub make_turn: bool,
}

impl PlayerDelta {
    fn unchanged(actor: &Seat) -> Self {
        Self {
            stack: actor.stack,
            last_bet: actor.last_bet,
            fold: actor.fold,
            all_in: actor.all_in,
            make_turn: actor.make_turn,
        }
    }

    /// Chips moved from stack to bet by this delta.
    pub fn committed(&self, before: &Seat) -> i64 {
        before.stack - self.stack
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidAction, detail)
}

/// `NotYourTurn` unless `actor` holds the turn.
pub fn ensure_turn(actor: &Seat) -> Result<(), DomainError> {
    if actor.is_current {
        return Ok(());
    }
    Err(DomainError::validation(
        ValidationKind::NotYourTurn,
        format!("Player #{} does not hold the turn", actor.id),
    ))
}

/// Compute the new betting fields for `actor` performing `action`.
///
/// Fails without computing anything when the actor does not hold the turn.
pub fn apply_action(actor: &Seat, action: Action) -> Result<PlayerDelta, DomainError> {
    ensure_turn(actor)?;

    let mut delta = PlayerDelta::unchanged(actor);

    match action {
        Action::Fold => {
            if actor.fold {
                return Err(invalid("Player has already folded"));
            }
            delta.fold = true;
            delta.make_turn = true;
        }
        Action::Call(amount) | Action::Raise(amount) => {
            ensure_can_bet(actor)?;
            if amount < 0 {
                return Err(invalid(format!("Bet amount must not be negative, got {amount}")));
            }
            if amount > actor.stack {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientStack,
                    format!("Bet of {amount} exceeds stack of {}", actor.stack),
                ));
            }
            delta.stack = actor.stack - amount;
            delta.last_bet = actor
                .last_bet
                .checked_add(amount)
                .ok_or_else(|| invalid("Bet total overflow"))?;
            // Checking for nothing on an empty stack is not an all-in.
            delta.all_in = amount > 0 && delta.stack == 0;
            delta.make_turn = true;
        }
        Action::AllIn => {
            ensure_can_bet(actor)?;
            if actor.stack == 0 {
                return Err(invalid("Cannot go all-in with an empty stack"));
            }
            delta.stack = 0;
            delta.last_bet = actor
                .last_bet
                .checked_add(actor.stack)
                .ok_or_else(|| invalid("Bet total overflow"))?;
            delta.all_in = true;
            delta.make_turn = true;
        }
    }

    Ok(delta)
}

fn ensure_can_bet(actor: &Seat) -> Result<(), DomainError> {
    if actor.fold {
        return Err(invalid("Folded player cannot bet"));
    }
    if actor.all_in {
        return Err(invalid("All-in player cannot bet"));
    }
    Ok(())
}
