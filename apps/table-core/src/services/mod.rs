//! Services: transaction boundaries and orchestration over repos and domain.

pub mod players;
pub mod room_scope;
pub mod turns;
