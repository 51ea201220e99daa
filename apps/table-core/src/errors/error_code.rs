//! Error codes for the table turn core.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings surfaced to
//! the game-flow layer.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn validation
    /// Action by a player who does not hold the turn
    NotYourTurn,
    /// Call or raise exceeds the player's stack
    InsufficientStack,
    /// Action not allowed in the player's current state
    InvalidAction,
    /// Invalid seat data (position, stack, name)
    InvalidSeat,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// Room has no seated players
    RoomNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Player name already in use
    NameTaken,
    /// Position already taken in the room
    PositionTaken,
    /// Another player already holds the turn
    TurnAlreadyHeld,
    /// Generic conflict
    Conflict,

    // Integrity
    /// Room turn state is inconsistent
    DataIntegrity,
    /// Room turn processing halted until corrected
    RoomHalted,

    // System Errors
    /// Transaction did not commit; safe to retry the identical request
    TransactionAborted,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InsufficientStack => "INSUFFICIENT_STACK",
            Self::InvalidAction => "INVALID_ACTION",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::NameTaken => "NAME_TAKEN",
            Self::PositionTaken => "POSITION_TAKEN",
            Self::TurnAlreadyHeld => "TURN_ALREADY_HELD",
            Self::Conflict => "CONFLICT",

            Self::DataIntegrity => "DATA_INTEGRITY",
            Self::RoomHalted => "ROOM_HALTED",

            Self::TransactionAborted => "TRANSACTION_ABORTED",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
