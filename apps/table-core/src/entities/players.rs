use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_name = "room_id")]
    pub room_id: String,
    pub position: i32,
    pub stack: i64,
    #[sea_orm(column_name = "last_bet")]
    pub last_bet: i64,
    pub fold: bool,
    #[sea_orm(column_name = "all_in")]
    pub all_in: bool,
    #[sea_orm(column_name = "make_turn")]
    pub make_turn: bool,
    #[sea_orm(column_name = "is_current_player")]
    pub is_current_player: bool,
    /// Opaque hand payload (JSON text); never interpreted by the turn core.
    #[sea_orm(column_type = "Text")]
    pub cards: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
