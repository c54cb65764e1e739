//! Transaction ledger service.
//!
//! Creates transactions against the owner's balance and runs the admin
//! approval workflow.

use std::sync::Arc;

use chrono::Utc;
use trustbank_shared::AppResult;
use trustbank_shared::types::{TransactionId, UserId};

use crate::ledger::balance;
use crate::ledger::error::LedgerError;
use crate::ledger::types::{CreateTransactionInput, Transaction, TransactionStatus};
use crate::ledger::validation::validate_input;
use crate::profile::{ProfileStore, UserProfile};
use crate::session::context::SessionContext;

/// Remote transaction store contract.
///
/// Implemented by the client crate against the REST backend.
pub trait TransactionStore: Send + Sync {
    /// Persists a new transaction together with the debited owner record
    /// as one transactional unit: both are written, or neither is.
    fn create_debited(
        &self,
        transaction: Transaction,
        owner: UserProfile,
    ) -> impl std::future::Future<Output = AppResult<Transaction>> + Send;

    /// Updates an existing transaction (status changes only).
    fn update(
        &self,
        transaction: Transaction,
    ) -> impl std::future::Future<Output = AppResult<Transaction>> + Send;

    /// Finds a transaction by ID.
    fn find_by_id(
        &self,
        id: TransactionId,
    ) -> impl std::future::Future<Output = AppResult<Option<Transaction>>> + Send;

    /// Lists an owner's transactions in insertion order.
    fn find_by_owner(
        &self,
        owner: UserId,
    ) -> impl std::future::Future<Output = AppResult<Vec<Transaction>>> + Send;

    /// Lists every transaction (admin-scoped endpoint).
    fn find_all(&self) -> impl std::future::Future<Output = AppResult<Vec<Transaction>>> + Send;
}

/// Service for creating, listing, and deciding transactions.
pub struct LedgerService<T: TransactionStore, P: ProfileStore> {
    transactions: Arc<T>,
    profiles: Arc<P>,
}

impl<T: TransactionStore, P: ProfileStore> LedgerService<T, P> {
    /// Creates a new ledger service.
    #[must_use]
    pub fn new(transactions: Arc<T>, profiles: Arc<P>) -> Self {
        Self {
            transactions,
            profiles,
        }
    }

    /// Creates a pending transaction, debiting the owner's balance.
    ///
    /// The owner record is re-read from the store so the debit is checked
    /// against the persisted balance, not a stale snapshot. Transaction and
    /// debited owner are persisted through one `create_debited` call, and
    /// the session's balance snapshot is updated on success.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, `InsufficientFunds`
    /// when the amount exceeds the available balance, `OwnerNotFound` when
    /// the owner record is missing, or the store failure.
    pub async fn create(
        &self,
        session: &mut SessionContext,
        input: CreateTransactionInput,
    ) -> Result<Transaction, LedgerError> {
        validate_input(&input)?;

        let owner_id = session.user_id();
        let mut owner = self
            .profiles
            .get_by_id(owner_id)
            .await?
            .ok_or(LedgerError::OwnerNotFound(owner_id))?;

        let amount = input.amount;
        owner.balance = balance::debit(owner.balance, amount)?;

        let transaction = Transaction::new(owner_id, input, Utc::now());
        let created = self.transactions.create_debited(transaction, owner).await?;

        session.debit_balance(amount);
        Ok(created)
    }

    /// Lists the caller's own transactions.
    ///
    /// # Errors
    ///
    /// Returns the store failure.
    pub async fn list_for_owner(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.find_by_owner(session.user_id()).await?)
    }

    /// Lists every transaction. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns the session error for non-admin callers or the store
    /// failure.
    pub async fn list_all(&self, session: &SessionContext) -> Result<Vec<Transaction>, LedgerError> {
        session.require_admin()?;
        Ok(self.transactions.find_all().await?)
    }

    /// Approves a pending transaction. Admin-only, idempotent.
    ///
    /// # Errors
    ///
    /// Returns the session error for non-admin callers, `NotFound` for an
    /// unknown ID, or the store failure.
    pub async fn approve(
        &self,
        session: &SessionContext,
        id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        self.decide(session, id, TransactionStatus::Approved).await
    }

    /// Rejects a pending transaction. Admin-only, idempotent.
    ///
    /// # Errors
    ///
    /// Returns the session error for non-admin callers, `NotFound` for an
    /// unknown ID, or the store failure.
    pub async fn reject(
        &self,
        session: &SessionContext,
        id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        self.decide(session, id, TransactionStatus::Rejected).await
    }

    /// Approval never touches any balance: the debit happened at creation
    /// time. Repeating a decision is a no-op with no store write; reversing
    /// a prior decision performs a normal update.
    async fn decide(
        &self,
        session: &SessionContext,
        id: TransactionId,
        target: TransactionStatus,
    ) -> Result<Transaction, LedgerError> {
        session.require_admin()?;

        let mut transaction = self
            .transactions
            .find_by_id(id)
            .await?
            .ok_or(LedgerError::TransactionNotFound(id))?;

        if transaction.status == target {
            return Ok(transaction);
        }

        transaction.status = target;
        Ok(self.transactions.update(transaction).await?)
    }
}
