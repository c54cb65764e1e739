//! Document approval error types.

use thiserror::Error;
use trustbank_shared::AppError;
use trustbank_shared::types::UserId;

use crate::documents::types::{DocumentSlot, SlotStatus};
use crate::session::error::SessionError;

/// Errors that can occur during document approval operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The user record does not exist.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// Attempted an invalid slot status transition.
    #[error("invalid transition on slot {slot}: {from:?} -> {to:?}")]
    InvalidTransition {
        /// The slot being changed.
        slot: DocumentSlot,
        /// The slot's current status.
        from: SlotStatus,
        /// The attempted target status.
        to: SlotStatus,
    },

    /// Session or authorization failure.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Remote store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl DocumentError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UserNotFound(_) => 404,
            Self::InvalidTransition { .. } => 400,
            Self::Session(e) => e.status_code(),
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Session(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}
