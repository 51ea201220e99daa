use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

/// Error surfaced to the game-flow layer.
///
/// Validation kinds (`NotFound`, `NotYourTurn`, `InsufficientStack`,
/// `InvalidAction`) are returned with nothing persisted and must not be
/// retried. `TransactionAborted` is the only retryable kind. `DataIntegrity`
/// halts the room until it is corrected externally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Not your turn: {detail}")]
    NotYourTurn { detail: String },
    #[error("Insufficient stack: {detail}")]
    InsufficientStack { detail: String },
    #[error("Invalid action: {detail}")]
    InvalidAction { detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Data integrity error: {detail}")]
    DataIntegrity { code: ErrorCode, detail: String },
    #[error("Transaction aborted: {detail}")]
    TransactionAborted { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { code, .. } => *code,
            AppError::NotYourTurn { .. } => ErrorCode::NotYourTurn,
            AppError::InsufficientStack { .. } => ErrorCode::InsufficientStack,
            AppError::InvalidAction { .. } => ErrorCode::InvalidAction,
            AppError::Validation { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::DataIntegrity { code, .. } => *code,
            AppError::TransactionAborted { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::NotFound { detail, .. }
            | AppError::NotYourTurn { detail }
            | AppError::InsufficientStack { detail }
            | AppError::InvalidAction { detail }
            | AppError::Validation { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::DataIntegrity { detail, .. }
            | AppError::TransactionAborted { detail, .. }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    /// Only transient storage failures may be retried, with the identical request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::TransactionAborted { .. })
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn data_integrity(detail: impl Into<String>) -> Self {
        Self::DataIntegrity {
            code: ErrorCode::DataIntegrity,
            detail: detail.into(),
        }
    }

    pub fn room_halted(detail: impl Into<String>) -> Self {
        Self::DataIntegrity {
            code: ErrorCode::RoomHalted,
            detail: detail.into(),
        }
    }

    pub fn aborted(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::TransactionAborted {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => match kind {
                ValidationKind::NotYourTurn => AppError::NotYourTurn { detail },
                ValidationKind::InsufficientStack => AppError::InsufficientStack { detail },
                ValidationKind::InvalidAction => AppError::InvalidAction { detail },
                ValidationKind::InvalidSeat => AppError::invalid(ErrorCode::InvalidSeat, detail),
                _ => AppError::invalid(ErrorCode::ValidationError, detail),
            },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Room => ErrorCode::RoomNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::NameTaken => ErrorCode::NameTaken,
                    ConflictKind::PositionTaken => ErrorCode::PositionTaken,
                    ConflictKind::TurnAlreadyHeld => ErrorCode::TurnAlreadyHeld,
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DataIntegrity => AppError::data_integrity(detail),
                InfraErrorKind::DbUnavailable => {
                    AppError::aborted(ErrorCode::DbUnavailable, detail)
                }
                InfraErrorKind::Timeout => AppError::aborted(ErrorCode::DbTimeout, detail),
                _ => AppError::aborted(ErrorCode::TransactionAborted, detail),
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
