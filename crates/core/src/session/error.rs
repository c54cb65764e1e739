//! Session error types.
//!
//! Missing or expired credentials never reach this enum: the client maps
//! HTTP 401 to `AppError::Unauthorized`, and `AppError::requires_reauth`
//! drives the forced re-login at the top level.

use thiserror::Error;

use crate::session::types::Role;

/// Errors raised by session authorization checks.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The principal's role does not satisfy the required role.
    #[error("role {role} does not satisfy required role {required}")]
    RoleMismatch {
        /// The principal's role.
        role: Role,
        /// The role required for the operation.
        required: Role,
    },
}

impl SessionError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::RoleMismatch { .. } => 403,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
        }
    }
}
