//! Room-scoped transaction: room lock + database transaction + halt handling.

use futures::future::BoxFuture;
use sea_orm::DatabaseTransaction;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Run `f` in one transaction while holding `room_id`'s exclusive lock.
///
/// Halted rooms are refused before and after waiting for the lock. A
/// `DataIntegrity` failure inside `f` halts the room.
pub async fn run_locked<R, F>(state: &AppState, room_id: &str, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    state.rooms.ensure_active(room_id)?;
    let guard = state.rooms.acquire(room_id, state.turns.lock_timeout).await?;
    // The request that held the lock before us may have halted the room.
    state.rooms.ensure_active(guard.room_id())?;

    // Halt before releasing the lock so queued requests see it.
    let result = halt_on_integrity(state, room_id, with_txn(state.db(), f).await);
    drop(guard);
    result
}

/// Halt `room_id` if `result` is a data-integrity failure found outside a
/// locked transaction (snapshot reads).
pub fn halt_on_integrity<R>(
    state: &AppState,
    room_id: &str,
    result: Result<R, AppError>,
) -> Result<R, AppError> {
    if let Err(AppError::DataIntegrity {
        code: ErrorCode::DataIntegrity,
        detail,
    }) = &result
    {
        state.rooms.halt(room_id, detail.clone());
    }
    result
}
