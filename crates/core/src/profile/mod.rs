//! User profile record and the remote profile store contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trustbank_shared::AppResult;
use trustbank_shared::types::UserId;

use crate::documents::types::{DocumentApprovalState, DocumentSlot};
use crate::session::types::Role;

/// The persisted user record.
///
/// The three document approval slots are an embedded structured field on
/// this record, so slot changes are written by updating the whole profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Available balance.
    pub balance: Decimal,
    /// Role of the user.
    pub role: Role,
    /// Document approval slots.
    #[serde(default)]
    pub documents: DocumentApprovalState,
}

/// Remote user/profile store contract.
///
/// Implemented by the client crate against the REST backend. Lookup methods
/// return `Ok(None)` for unknown users; transport and server failures come
/// back as `AppError`.
pub trait ProfileStore: Send + Sync {
    /// Finds a profile by email.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = AppResult<Option<UserProfile>>> + Send;

    /// Finds a profile by user ID.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = AppResult<Option<UserProfile>>> + Send;

    /// Writes the whole profile record back in one update.
    fn update(
        &self,
        profile: UserProfile,
    ) -> impl std::future::Future<Output = AppResult<UserProfile>> + Send;

    /// Lists every profile (admin-scoped endpoint).
    fn find_all(&self) -> impl std::future::Future<Output = AppResult<Vec<UserProfile>>> + Send;

    /// Uploads a document binary to the slot's dedicated endpoint.
    fn upload_document(
        &self,
        user: UserId,
        slot: DocumentSlot,
        content: Vec<u8>,
        filename: &str,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;
}
