//! Transaction ledger and approval workflow.
//!
//! Users create money-transfer transactions that debit their balance at
//! creation time; admins approve or reject them afterwards.
//!
//! # Modules
//!
//! - `types` - Transaction and status types
//! - `validation` - Boundary validation of caller input
//! - `balance` - Pure balance reconciliation
//! - `error` - Ledger-specific error types
//! - `service` - Create, list, and decide operations

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use balance::BalanceError;
pub use error::LedgerError;
pub use service::{LedgerService, TransactionStore};
pub use types::{CreateTransactionInput, Transaction, TransactionStatus};
pub use validation::LedgerValidationError;
