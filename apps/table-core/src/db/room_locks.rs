//! Per-room exclusive access for turn transactions.
//!
//! Every mutation of a room's player set runs while holding that room's
//! mutex, so load → apply → advance → commit never interleaves with another
//! transaction on the same room. Rooms are independent and proceed in parallel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Default)]
pub struct RoomLocks {
    // Entries are never removed: dropping a mutex another task is waiting
    // on would let a third task create a fresh one and enter concurrently.
    locks: DashMap<String, Arc<Mutex<()>>>,
    halted: DashMap<String, String>,
}

/// Held for the lifetime of one turn transaction.
#[derive(Debug)]
pub struct RoomGuard {
    room_id: String,
    _guard: OwnedMutexGuard<()>,
}

impl RoomGuard {
    pub fn room_id(&self) -> &str {
        &self.room_id
    }
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `room_id`, up to `timeout`.
    ///
    /// Timing out is reported as a retryable `TransactionAborted`.
    pub async fn acquire(&self, room_id: &str, timeout: Duration) -> Result<RoomGuard, AppError> {
        let lock = self
            .locks
            .entry(room_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let wait_start = Instant::now();
        let guard = tokio::time::timeout(timeout, lock.lock_owned())
            .await
            .map_err(|_| {
                warn!(room_id, timeout_ms = timeout.as_millis() as u64, "room lock wait timed out");
                AppError::aborted(
                    ErrorCode::TransactionAborted,
                    format!("Timed out waiting for room {room_id}"),
                )
            })?;

        let wait_ms = wait_start.elapsed().as_millis();
        if wait_ms > 0 {
            debug!(room_id, wait_ms = wait_ms as u64, "waited for room lock");
        }

        Ok(RoomGuard {
            room_id: room_id.to_owned(),
            _guard: guard,
        })
    }

    /// Stop all turn processing for a room until `resume` is called.
    pub fn halt(&self, room_id: &str, reason: impl Into<String>) {
        let reason = reason.into();
        error!(room_id, reason = %reason, "room turn processing halted");
        self.halted.insert(room_id.to_owned(), reason);
    }

    pub fn halted_reason(&self, room_id: &str) -> Option<String> {
        self.halted.get(room_id).map(|entry| entry.value().clone())
    }

    /// Fails with `RoomHalted` when the room is halted.
    pub fn ensure_active(&self, room_id: &str) -> Result<(), AppError> {
        match self.halted_reason(room_id) {
            Some(reason) => Err(AppError::room_halted(format!(
                "Room {room_id} is halted pending correction: {reason}"
            ))),
            None => Ok(()),
        }
    }

    /// Clear a halt after external correction. Returns whether the room was halted.
    pub fn resume(&self, room_id: &str) -> bool {
        let was_halted = self.halted.remove(room_id).is_some();
        if was_halted {
            info!(room_id, "room turn processing resumed");
        }
        was_halted
    }
}
