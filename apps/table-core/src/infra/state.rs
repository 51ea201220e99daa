use crate::config::db::DbProfile;
use crate::config::turns::TurnSettings;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and callers)
pub struct StateBuilder {
    db_profile: DbProfile,
    turns: Option<TurnSettings>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: DbProfile::InMemory,
            turns: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = profile;
        self
    }

    pub fn with_turn_settings(mut self, turns: TurnSettings) -> Self {
        self.turns = Some(turns);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let turns = match self.turns {
            Some(turns) => turns,
            None => TurnSettings::from_env()?,
        };
        // single entrypoint: connect + migrate
        let conn = bootstrap_db(&self.db_profile).await?;
        Ok(AppState::new(conn, turns))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
