use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

/// Settings for the turn coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSettings {
    /// How long a request may wait for its room's lock before giving up
    /// with a retryable `TransactionAborted`.
    pub lock_timeout: Duration,
}

impl TurnSettings {
    /// Reads `TABLE_TURN_LOCK_TIMEOUT_MS`, falling back to the default.
    pub fn from_env() -> Result<Self, AppError> {
        let lock_timeout_ms = match env::var("TABLE_TURN_LOCK_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "TABLE_TURN_LOCK_TIMEOUT_MS must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_LOCK_TIMEOUT_MS,
        };
        if lock_timeout_ms == 0 {
            return Err(AppError::config(
                "TABLE_TURN_LOCK_TIMEOUT_MS must be greater than zero",
            ));
        }
        Ok(Self {
            lock_timeout: Duration::from_millis(lock_timeout_ms),
        })
    }

    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }
}

impl Default for TurnSettings {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS),
        }
    }
}
