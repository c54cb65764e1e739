//! Balance reconciliation.
//!
//! Pure functions over decimal balances; callers persist the result. Debits
//! must never take an account below zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from balance reconciliation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    /// The requested debit exceeds the available balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The requested debit amount.
        requested: Decimal,
        /// The balance available at the time of the request.
        available: Decimal,
    },

    /// A debit amount must be strictly positive.
    #[error("debit amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

impl BalanceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::NonPositiveAmount(_) => "INVALID_AMOUNT",
        }
    }
}

/// Computes the balance remaining after a debit.
///
/// # Errors
///
/// Returns `InsufficientFunds` when `amount > balance` and
/// `NonPositiveAmount` when `amount <= 0`. The input balance is never
/// modified; persisting the result is the caller's job.
pub fn debit(balance: Decimal, amount: Decimal) -> Result<Decimal, BalanceError> {
    if amount <= Decimal::ZERO {
        return Err(BalanceError::NonPositiveAmount(amount));
    }
    if amount > balance {
        return Err(BalanceError::InsufficientFunds {
            requested: amount,
            available: balance,
        });
    }
    Ok(balance - amount)
}
