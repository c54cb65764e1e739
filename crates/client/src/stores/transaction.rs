//! Transaction store backed by the `/api/transaction` endpoints.

use std::sync::Arc;

use reqwest::Method;
use trustbank_core::ledger::service::TransactionStore;
use trustbank_core::ledger::types::Transaction;
use trustbank_core::profile::UserProfile;
use trustbank_shared::AppResult;
use trustbank_shared::types::{TransactionId, UserId};

use crate::api::ApiClient;
use crate::wire::{CreateDebitedDto, TransactionDto, transactions_from_wire};

/// Talks to the backend's transaction endpoints.
pub struct HttpTransactionStore {
    api: Arc<ApiClient>,
}

impl HttpTransactionStore {
    /// Creates a store over a shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

impl TransactionStore for HttpTransactionStore {
    async fn create_debited(
        &self,
        transaction: Transaction,
        owner: UserProfile,
    ) -> AppResult<Transaction> {
        let body = CreateDebitedDto {
            transaction: transaction.into(),
            owner: owner.into(),
        };
        let request = self
            .api
            .request(Method::POST, "/api/transaction/save")
            .json(&body);
        let dto: TransactionDto = self.api.send_json(request).await?;
        dto.try_into()
    }

    async fn update(&self, transaction: Transaction) -> AppResult<Transaction> {
        let body = TransactionDto::from(transaction);
        let request = self
            .api
            .request(Method::PUT, "/api/transaction/update")
            .json(&body);
        let dto: TransactionDto = self.api.send_json(request).await?;
        dto.try_into()
    }

    // The backend has no by-id endpoint; decisions operate on the admin
    // listing, so a scan over it is the lookup.
    async fn find_by_id(&self, id: TransactionId) -> AppResult<Option<Transaction>> {
        let all = self.find_all().await?;
        Ok(all.into_iter().find(|tx| tx.id == id))
    }

    async fn find_by_owner(&self, owner: UserId) -> AppResult<Vec<Transaction>> {
        let request = self
            .api
            .request(Method::GET, "/api/transaction/findByUser")
            .query(&[("idUser", owner.into_inner())]);
        let dtos: Vec<TransactionDto> = self.api.send_json(request).await?;
        transactions_from_wire(dtos)
    }

    async fn find_all(&self) -> AppResult<Vec<Transaction>> {
        let request = self.api.request(Method::GET, "/api/transaction/findAll");
        let dtos: Vec<TransactionDto> = self.api.send_json(request).await?;
        transactions_from_wire(dtos)
    }
}
