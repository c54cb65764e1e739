//! Ledger error types.

use thiserror::Error;
use trustbank_shared::AppError;
use trustbank_shared::types::{TransactionId, UserId};

use crate::ledger::balance::BalanceError;
use crate::ledger::validation::LedgerValidationError;
use crate::session::error::SessionError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input failed boundary validation.
    #[error(transparent)]
    Validation(#[from] LedgerValidationError),

    /// The debit could not be reconciled against the owner's balance.
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// Transaction not found.
    #[error("transaction {0} not found")]
    TransactionNotFound(TransactionId),

    /// Owner record not found.
    #[error("owner {0} not found")]
    OwnerNotFound(UserId),

    /// Session or authorization failure.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Remote store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl LedgerError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Balance(_) => 400,
            Self::TransactionNotFound(_) | Self::OwnerNotFound(_) => 404,
            Self::Session(e) => e.status_code(),
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Balance(e) => e.error_code(),
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::OwnerNotFound(_) => "OWNER_NOT_FOUND",
            Self::Session(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_funds_maps_to_validation_class() {
        let err = LedgerError::Balance(BalanceError::InsufficientFunds {
            requested: dec!(120.00),
            available: dec!(100.00),
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INSUFFICIENT_FUNDS");
    }

    #[test]
    fn test_not_found() {
        let err = LedgerError::TransactionNotFound(TransactionId::from_raw(1));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "TRANSACTION_NOT_FOUND");
    }

    #[test]
    fn test_store_error_passthrough() {
        let err = LedgerError::Store(AppError::Request("timeout".into()));
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.error_code(), "REQUEST_ERROR");
    }
}
