pub mod room_locks;
pub mod txn;
