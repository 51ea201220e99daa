//! SeaORM adapter for the player record store - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::players;
use crate::infra::db_errors::PLAYER_NOT_FOUND_PREFIX;

pub mod dto;

pub use dto::{PlayerCreate, PlayerUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

fn player_not_found(key: impl std::fmt::Display) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("{PLAYER_NOT_FOUND_PREFIX}{key}"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| player_not_found(format!("#{player_id}")))
}

pub async fn require_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_name(conn, name)
        .await?
        .ok_or_else(|| player_not_found(name))
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        room_id: Set(dto.room_id),
        position: Set(dto.position),
        stack: Set(dto.stack),
        last_bet: Set(0),
        fold: Set(false),
        all_in: Set(false),
        make_turn: Set(false),
        is_current_player: Set(false),
        cards: Set(dto.cards.unwrap_or_else(|| "[]".to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player.insert(conn).await
}

/// Apply the fields set on `dto`, then refetch.
///
/// An empty update is a plain read.
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    if dto.is_empty() {
        return require_by_id(conn, dto.id).await;
    }

    let now = time::OffsetDateTime::now_utc();
    let mut update = players::Entity::update_many()
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into());

    if let Some(stack) = dto.stack {
        update = update.col_expr(players::Column::Stack, Expr::val(stack).into());
    }
    if let Some(last_bet) = dto.last_bet {
        update = update.col_expr(players::Column::LastBet, Expr::val(last_bet).into());
    }
    if let Some(fold) = dto.fold {
        update = update.col_expr(players::Column::Fold, Expr::val(fold).into());
    }
    if let Some(all_in) = dto.all_in {
        update = update.col_expr(players::Column::AllIn, Expr::val(all_in).into());
    }
    if let Some(make_turn) = dto.make_turn {
        update = update.col_expr(players::Column::MakeTurn, Expr::val(make_turn).into());
    }
    if let Some(current) = dto.is_current_player {
        update = update.col_expr(players::Column::IsCurrentPlayer, Expr::val(current).into());
    }
    if let Some(cards) = dto.cards {
        update = update.col_expr(players::Column::Cards, Expr::val(cards).into());
    }

    let result = update
        .filter(players::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(player_not_found(format!("#{}", dto.id)));
    }

    require_by_id(conn, dto.id).await
}

/// Flip only the current-player flag.
pub async fn set_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    is_current: bool,
) -> Result<players::Model, sea_orm::DbErr> {
    update_player(conn, PlayerUpdate::new(player_id).with_current(is_current)).await
}

/// Delete the player seated in `room_id` under `name`. Never crosses rooms.
pub async fn delete_by_name_and_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    room_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_many()
        .filter(players::Column::Name.eq(name))
        .filter(players::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Remove every player seated in `room_id`.
pub async fn delete_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_many()
        .filter(players::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// All players in a room, by position.
pub async fn find_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .order_by_asc(players::Column::Position)
        .all(conn)
        .await
}

/// Non-folded players in a room, by position.
pub async fn find_eligible<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .filter(players::Column::Fold.eq(false))
        .order_by_asc(players::Column::Position)
        .all(conn)
        .await
}

/// Every row flagged current in a room.
///
/// More than one row is an integrity failure; the repos layer reports it.
pub async fn find_current_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .filter(players::Column::IsCurrentPlayer.eq(true))
        .order_by_asc(players::Column::Position)
        .all(conn)
        .await
}

/// Largest `last_bet` in the room, 0 for an empty room.
pub async fn find_top_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<i64, sea_orm::DbErr> {
    let top = players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .order_by_desc(players::Column::LastBet)
        .one(conn)
        .await?;
    Ok(top.map(|p| p.last_bet).unwrap_or(0))
}
