#![allow(dead_code)]

// tests/common/mod.rs
use table_core::config::db::DbProfile;
use table_core::config::turns::TurnSettings;
use table_core::infra::state::build_state;
use table_core::repos::players::{self, Player};
use table_core::services::players::PlayerService;
use table_core::services::turns::TurnService;
use table_core::state::app_state::AppState;
use table_test_support::unique_helpers::{unique_names, unique_room};

// Logging is auto-installed for every test binary that uses `mod common`
#[ctor::ctor]
fn init_logging() {
    table_test_support::logging::init();
}

/// Fresh in-memory database with the schema applied.
pub async fn fresh_state() -> AppState {
    fresh_state_with(TurnSettings::default()).await
}

pub async fn fresh_state_with(turns: TurnSettings) -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_turn_settings(turns)
        .build()
        .await
        .expect("build in-memory state")
}

/// A seated room plus the services operating on it.
pub struct Table {
    pub state: AppState,
    pub turns: TurnService,
    pub players: PlayerService,
    pub room: String,
    /// Names in seating order; `names[i]` sits at `positions[i]`.
    pub names: Vec<String>,
}

impl Table {
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub async fn player(&self, i: usize) -> Player {
        players::get(self.state.db(), &self.names[i])
            .await
            .expect("player exists")
    }

    pub async fn current_count(&self) -> usize {
        players::find_by_room(self.state.db(), &self.room)
            .await
            .expect("room listing")
            .iter()
            .filter(|p| p.is_current_player)
            .count()
    }
}

/// Seat one player per `(position, stack)` in a fresh room.
pub async fn seat_table(seats: &[(i32, i64)]) -> Table {
    seat_table_in(fresh_state().await, seats).await
}

pub async fn seat_table_in(state: AppState, seats: &[(i32, i64)]) -> Table {
    let room = unique_room();
    let names = unique_names("p", seats.len());
    let player_service = PlayerService::new(state.clone());
    for (name, (position, stack)) in names.iter().zip(seats) {
        player_service
            .seat_player(name, *position, *stack, &room)
            .await
            .expect("seat player");
    }
    Table {
        turns: TurnService::new(state.clone()),
        players: player_service,
        state,
        room,
        names,
    }
}
