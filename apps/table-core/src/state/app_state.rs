use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::turns::TurnSettings;
use crate::db::room_locks::RoomLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Per-room exclusive locks and halted-room registry
    pub rooms: Arc<RoomLocks>,
    /// Coordinator settings
    pub turns: TurnSettings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, turns: TurnSettings) -> Self {
        Self {
            db,
            rooms: Arc::new(RoomLocks::new()),
            turns,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
