use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::players::{self, Player};
use crate::services::room_scope::run_locked;
use crate::state::app_state::AppState;

/// Seating and table reads.
#[derive(Debug, Clone)]
pub struct PlayerService {
    state: AppState,
}

fn invalid_seat(detail: impl Into<String>) -> AppError {
    DomainError::validation(ValidationKind::InvalidSeat, detail).into()
}

async fn seat_in_txn(
    txn: &DatabaseTransaction,
    name: &str,
    position: i32,
    stack: i64,
    room_id: &str,
) -> Result<Player, AppError> {
    let player = players::create(txn, name, position, stack, room_id).await?;
    info!(room_id, player = name, position, stack, "player seated");
    Ok(player)
}

async fn clear_in_txn(txn: &DatabaseTransaction, room_id: &str) -> Result<u64, AppError> {
    let removed = players::clear_room(txn, room_id).await?;
    info!(room_id, removed, "room cleared");
    Ok(removed)
}

impl PlayerService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Seat a new player. Name and (room, position) must be free.
    pub async fn seat_player(
        &self,
        name: &str,
        position: i32,
        stack: i64,
        room_id: &str,
    ) -> Result<Player, AppError> {
        if name.trim().is_empty() {
            return Err(invalid_seat("Player name must not be empty"));
        }
        if room_id.trim().is_empty() {
            return Err(invalid_seat("Room id must not be empty"));
        }
        if position < 0 {
            return Err(invalid_seat(format!("Position must not be negative, got {position}")));
        }
        if stack < 0 {
            return Err(invalid_seat(format!("Stack must not be negative, got {stack}")));
        }

        let name = name.to_owned();
        let room = room_id.to_owned();
        run_locked(&self.state, room_id, move |txn| {
            Box::pin(async move { seat_in_txn(txn, &name, position, stack, &room).await })
        })
        .await
    }

    /// Remove everyone seated in `room_id`, under the room lock. Other rooms
    /// are untouched; clearing an empty room removes nothing.
    pub async fn clear_room(&self, room_id: &str) -> Result<u64, AppError> {
        let room = room_id.to_owned();
        run_locked(&self.state, room_id, move |txn| {
            Box::pin(async move { clear_in_txn(txn, &room).await })
        })
        .await
    }

    pub async fn get_player(&self, name: &str) -> Result<Player, AppError> {
        Ok(players::get(self.state.db(), name).await?)
    }

    /// Everyone seated in `room_id`, by position. A room nobody sits in is
    /// `RoomNotFound`.
    pub async fn table(&self, room_id: &str) -> Result<Vec<Player>, AppError> {
        Ok(players::require_room(self.state.db(), room_id).await?)
    }
}
