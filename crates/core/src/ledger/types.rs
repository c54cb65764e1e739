//! Ledger domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use trustbank_shared::types::{TransactionId, UserId};

/// Approval status of a money-transfer transaction.
///
/// Transactions are created pending and decided by an admin:
/// - Pending -> Approved (approve)
/// - Pending -> Rejected (reject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Approved by an admin.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the legacy wire encoding.
    ///
    /// The backend stores the status as a nullable string flag: null while
    /// pending, `"true"` once approved, `"false"` once rejected.
    #[must_use]
    pub const fn to_wire(self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::Approved => Some("true"),
            Self::Rejected => Some("false"),
        }
    }

    /// Parses the legacy wire encoding; anything unrecognized is pending.
    #[must_use]
    pub fn from_wire(s: Option<&str>) -> Self {
        match s {
            Some("true") => Self::Approved,
            Some("false") => Self::Rejected,
            _ => Self::Pending,
        }
    }

    /// Returns true once an admin has decided the transaction.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A money-transfer transaction in the ledger.
///
/// Immutable once created, except for its approval status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, derived from the creation timestamp.
    pub id: TransactionId,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// Free-text description.
    pub description: String,
    /// Debit amount (strictly positive).
    pub amount: Decimal,
    /// Destination bank.
    pub bank: String,
    /// Transfer type.
    pub kind: String,
    /// Approval status.
    pub status: TransactionStatus,
    /// The user the transaction belongs to.
    pub owner: UserId,
}

impl Transaction {
    /// Builds a new pending transaction for an owner.
    #[must_use]
    pub fn new(owner: UserId, input: CreateTransactionInput, at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::from_timestamp(at),
            created_at: at,
            description: input.description,
            amount: input.amount,
            bank: input.bank,
            kind: input.kind,
            status: TransactionStatus::Pending,
            owner,
        }
    }
}

/// Caller-supplied fields for a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionInput {
    /// Free-text description.
    pub description: String,
    /// Debit amount.
    pub amount: Decimal,
    /// Destination bank.
    pub bank: String,
    /// Transfer type.
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_as_str_and_parse() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Approved,
            TransactionStatus::Rejected,
        ] {
            assert_eq!(TransactionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransactionStatus::parse("PENDING"), Some(TransactionStatus::Pending));
        assert_eq!(TransactionStatus::parse("voided"), None);
    }

    #[test]
    fn test_status_wire_encoding() {
        assert_eq!(TransactionStatus::Pending.to_wire(), None);
        assert_eq!(TransactionStatus::Approved.to_wire(), Some("true"));
        assert_eq!(TransactionStatus::Rejected.to_wire(), Some("false"));

        assert_eq!(TransactionStatus::from_wire(None), TransactionStatus::Pending);
        assert_eq!(
            TransactionStatus::from_wire(Some("true")),
            TransactionStatus::Approved
        );
        assert_eq!(
            TransactionStatus::from_wire(Some("false")),
            TransactionStatus::Rejected
        );
    }

    #[test]
    fn test_new_transaction_is_pending_with_timestamp_id() {
        let at = Utc::now();
        let tx = Transaction::new(
            UserId::from_raw(5),
            CreateTransactionInput {
                description: "rent payment".into(),
                amount: dec!(30.00),
                bank: "First National".into(),
                kind: "transfer".into(),
            },
            at,
        );
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.id, TransactionId::from_timestamp(at));
        assert_eq!(tx.owner, UserId::from_raw(5));
        assert_eq!(tx.amount, dec!(30.00));
    }

    #[test]
    fn test_is_decided() {
        assert!(!TransactionStatus::Pending.is_decided());
        assert!(TransactionStatus::Approved.is_decided());
        assert!(TransactionStatus::Rejected.is_decided());
    }
}
