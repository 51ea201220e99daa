//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::players_sea as players_adapter;
use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::domain::Seat;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub room_id: String,
    pub position: i32,
    pub stack: i64,
    pub last_bet: i64,
    pub fold: bool,
    pub all_in: bool,
    pub make_turn: bool,
    pub is_current_player: bool,
    /// Opaque JSON, stored and returned verbatim.
    pub cards: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Player {
    pub fn seat(&self) -> Seat {
        Seat {
            id: self.id,
            position: self.position,
            stack: self.stack,
            last_bet: self.last_bet,
            fold: self.fold,
            all_in: self.all_in,
            make_turn: self.make_turn,
            is_current: self.is_current_player,
        }
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            room_id: model.room_id,
            position: model.position,
            stack: model.stack,
            last_bet: model.last_bet,
            fold: model.fold,
            all_in: model.all_in,
            make_turn: model.make_turn,
            is_current_player: model.is_current_player,
            cards: model.cards,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// Free functions (generic) over any connection or transaction

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Player, DomainError> {
    let player = players_adapter::require_by_name(conn, name).await?;
    Ok(Player::from(player))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_name(conn, name).await?;
    Ok(player.map(Player::from))
}

pub async fn get_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    let player = players_adapter::require_by_id(conn, player_id).await?;
    Ok(Player::from(player))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    position: i32,
    stack: i64,
    room_id: &str,
) -> Result<Player, DomainError> {
    let dto = PlayerCreate::new(name, position, stack, room_id);
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    update: PlayerUpdate,
) -> Result<Player, DomainError> {
    let player = players_adapter::update_player(conn, update).await?;
    Ok(Player::from(player))
}

pub async fn set_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    is_current: bool,
) -> Result<Player, DomainError> {
    let player = players_adapter::set_current(conn, player_id, is_current).await?;
    Ok(Player::from(player))
}

/// Remove a player from one room. Returns the number of rows removed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    room_id: &str,
) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_by_name_and_room(conn, name, room_id).await?)
}

/// Empty the table. Returns the number of players removed.
pub async fn clear_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_by_room(conn, room_id).await?)
}

pub async fn find_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::find_by_room(conn, room_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

pub async fn find_eligible<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::find_eligible(conn, room_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// The player holding the turn, if any.
///
/// More than one holder is a data-integrity error, never resolved silently.
pub async fn find_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Option<Player>, DomainError> {
    let mut rows = players_adapter::find_current_rows(conn, room_id).await?;
    if rows.len() > 1 {
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        return Err(DomainError::data_integrity(format!(
            "Room {room_id} has {} current players: {}",
            rows.len(),
            names.join(", ")
        )));
    }
    Ok(rows.pop().map(Player::from))
}

pub async fn find_top_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<i64, DomainError> {
    Ok(players_adapter::find_top_bet(conn, room_id).await?)
}

/// Like [`find_by_room`], but an empty room is `NotFound`.
pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let table = find_by_room(conn, room_id).await?;
    if table.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::Room,
            format!("Room {room_id} has no players"),
        ));
    }
    Ok(table)
}
