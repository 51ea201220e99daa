//! Turn transaction coordinator.
//!
//! One request = one room lock + one database transaction:
//! load actor and room, apply the action, select the next player, write
//! everything, commit. Any failure rolls the whole request back.

use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adapters::players_sea::PlayerUpdate;
use crate::domain::{apply_action, ensure_turn, select_next, NextTurn, TurnAction};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::players::{self, Player};
use crate::services::room_scope::{halt_on_integrity, run_locked};
use crate::state::app_state::AppState;

/// Progress of one turn transaction, traced at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Validating,
    Applying,
    Advancing,
    Committed,
    /// Rejected during validation; nothing was written.
    Aborted,
    /// Failed after writes began; the transaction was rolled back.
    RolledBack,
}

/// Result of a committed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub updated_player: Player,
    pub next_current_player: Option<Player>,
    pub hand_complete: bool,
}

fn trace_phase(room_id: &str, actor: &str, phase: TurnPhase) {
    debug!(room_id, actor, phase = ?phase, "turn phase");
}

/// Errors raised before any write are aborts; everything else is a rollback.
fn failed_phase(err: &AppError) -> TurnPhase {
    match err {
        AppError::NotFound { .. }
        | AppError::NotYourTurn { .. }
        | AppError::InsufficientStack { .. }
        | AppError::InvalidAction { .. }
        | AppError::Validation { .. }
        | AppError::Conflict { .. } => TurnPhase::Aborted,
        _ => TurnPhase::RolledBack,
    }
}

/// Load `name` and make sure they sit in `room_id`.
async fn load_seated(
    txn: &DatabaseTransaction,
    room_id: &str,
    name: &str,
) -> Result<Player, DomainError> {
    let player = players::get(txn, name).await?;
    if player.room_id != room_id {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {name} is not seated in room {room_id}"),
        ));
    }
    Ok(player)
}

/// Hand the turn on from the player at `acting_position`.
///
/// `exclude` drops a player from consideration (a player who is leaving).
async fn advance(
    txn: &DatabaseTransaction,
    room_id: &str,
    acting_position: i32,
    exclude: Option<i64>,
) -> Result<Option<Player>, AppError> {
    let seats: Vec<_> = players::find_eligible(txn, room_id)
        .await?
        .iter()
        .filter(|p| Some(p.id) != exclude)
        .map(Player::seat)
        .collect();

    match select_next(&seats, acting_position)? {
        NextTurn::Next(id) => Ok(Some(players::set_current(txn, id, true).await?)),
        NextTurn::HandComplete => Ok(None),
    }
}

async fn run_turn(
    txn: &DatabaseTransaction,
    room_id: &str,
    actor_name: &str,
    action: TurnAction,
) -> Result<TurnOutcome, AppError> {
    trace_phase(room_id, actor_name, TurnPhase::Validating);

    let actor = load_seated(txn, room_id, actor_name).await?;
    // Surfaces several current players before anything else is judged.
    players::find_current(txn, room_id).await?;

    let seat = actor.seat();
    ensure_turn(&seat)?;
    let top_bet = players::find_top_bet(txn, room_id).await?;
    let resolved = action.resolve(&seat, top_bet)?;
    let delta = apply_action(&seat, resolved)?;

    trace_phase(room_id, actor_name, TurnPhase::Applying);
    let update = PlayerUpdate::new(actor.id)
        .with_stack(delta.stack)
        .with_last_bet(delta.last_bet)
        .with_fold(delta.fold)
        .with_all_in(delta.all_in)
        .with_make_turn(delta.make_turn)
        .with_current(false);
    let updated_player = players::update(txn, update).await?;

    trace_phase(room_id, actor_name, TurnPhase::Advancing);
    let next_current_player = advance(txn, room_id, actor.position, None).await?;

    info!(
        room_id,
        actor = actor_name,
        action = ?resolved,
        committed = delta.committed(&seat),
        stack = updated_player.stack,
        next = next_current_player.as_ref().map(|p| p.name.as_str()),
        "turn applied"
    );

    Ok(TurnOutcome {
        hand_complete: next_current_player.is_none(),
        updated_player,
        next_current_player,
    })
}

async fn open_turn_in_txn(
    txn: &DatabaseTransaction,
    room_id: &str,
    name: &str,
) -> Result<Player, AppError> {
    let player = load_seated(txn, room_id, name).await?;
    match players::find_current(txn, room_id).await? {
        Some(holder) if holder.id == player.id => return Ok(holder),
        Some(holder) => {
            return Err(DomainError::conflict(
                ConflictKind::TurnAlreadyHeld,
                format!("{} already holds the turn in room {room_id}", holder.name),
            )
            .into());
        }
        None => {}
    }
    if !player.seat().can_act() {
        return Err(DomainError::validation(
            ValidationKind::InvalidAction,
            format!("{name} cannot take the turn"),
        )
        .into());
    }
    let player = players::set_current(txn, player.id, true).await?;
    info!(room_id, player = name, "turn opened");
    Ok(player)
}

async fn leave_in_txn(
    txn: &DatabaseTransaction,
    room_id: &str,
    name: &str,
) -> Result<u64, AppError> {
    let leaver = players::find_by_name(txn, name)
        .await?
        .filter(|p| p.room_id == room_id);
    let Some(leaver) = leaver else {
        return Ok(0);
    };

    let next = if leaver.is_current_player {
        players::find_current(txn, room_id).await?;
        advance(txn, room_id, leaver.position, Some(leaver.id)).await?
    } else {
        None
    };

    let removed = players::delete(txn, name, room_id).await?;
    info!(
        room_id,
        player = name,
        next = next.as_ref().map(|p| p.name.as_str()),
        "player left room"
    );
    Ok(removed)
}

/// Coordinates turn transactions for every room of one process.
#[derive(Debug, Clone)]
pub struct TurnService {
    state: AppState,
}

impl TurnService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Apply `action` for `actor_name` and advance the turn, atomically.
    ///
    /// Checks run in order: actor exists in the room, room state is
    /// consistent, actor holds the turn, action is legal. A rejected
    /// request leaves the room untouched; repeating a request that already
    /// committed fails with `NotYourTurn`.
    pub async fn perform_turn(
        &self,
        room_id: &str,
        actor_name: &str,
        action: TurnAction,
    ) -> Result<TurnOutcome, AppError> {
        trace_phase(room_id, actor_name, TurnPhase::Idle);

        let room = room_id.to_owned();
        let actor = actor_name.to_owned();
        let result = run_locked(&self.state, room_id, move |txn| {
            Box::pin(async move { run_turn(txn, &room, &actor, action).await })
        })
        .await;

        match &result {
            Ok(_) => trace_phase(room_id, actor_name, TurnPhase::Committed),
            Err(err) => {
                let phase = failed_phase(err);
                trace_phase(room_id, actor_name, phase);
                if phase == TurnPhase::RolledBack {
                    warn!(room_id, actor = actor_name, error = %err, "turn rolled back");
                }
            }
        }
        result
    }

    /// Snapshot read of the room's current player.
    pub async fn get_current_player(&self, room_id: &str) -> Result<Option<Player>, AppError> {
        let result = players::find_current(self.state.db(), room_id)
            .await
            .map_err(AppError::from);
        halt_on_integrity(&self.state, room_id, result)
    }

    /// Give the turn to `name` when nobody in the room holds it.
    ///
    /// Used by the game flow at the start of a hand or betting round.
    /// Opening the turn for the player who already holds it is a no-op.
    pub async fn open_turn(&self, room_id: &str, name: &str) -> Result<Player, AppError> {
        let room = room_id.to_owned();
        let name = name.to_owned();
        run_locked(&self.state, room_id, move |txn| {
            Box::pin(async move { open_turn_in_txn(txn, &room, &name).await })
        })
        .await
    }

    /// Remove `name` from `room_id`. Returns the number of players removed.
    ///
    /// When the leaver held the turn, it moves on to the next eligible
    /// player in the same transaction.
    pub async fn leave_room(&self, name: &str, room_id: &str) -> Result<u64, AppError> {
        let room = room_id.to_owned();
        let name = name.to_owned();
        run_locked(&self.state, room_id, move |txn| {
            Box::pin(async move { leave_in_txn(txn, &room, &name).await })
        })
        .await
    }

    /// Clear a data-integrity halt once the room has been corrected.
    pub fn resume_room(&self, room_id: &str) -> bool {
        self.state.rooms.resume(room_id)
    }

    pub fn halted_reason(&self, room_id: &str) -> Option<String> {
        self.state.rooms.halted_reason(room_id)
    }
}
