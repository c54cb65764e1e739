//! Profile store backed by the `/api/user` and `/api/admin/documents`
//! endpoints.

use std::sync::Arc;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use trustbank_core::documents::types::DocumentSlot;
use trustbank_core::profile::{ProfileStore, UserProfile};
use trustbank_shared::types::UserId;
use trustbank_shared::{AppError, AppResult};

use crate::api::ApiClient;
use crate::wire::UserDto;

/// Talks to the backend's user endpoints.
pub struct HttpProfileStore {
    api: Arc<ApiClient>,
}

impl HttpProfileStore {
    /// Creates a store over a shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Each slot uploads to its own endpoint; the request shape is identical.
const fn upload_path(slot: DocumentSlot) -> &'static str {
    match slot {
        DocumentSlot::Photo => "/api/user/upload",
        DocumentSlot::IdFront => "/api/user/upload/documentFrom",
        DocumentSlot::IdBack => "/api/user/upload/documentBack",
    }
}

/// Lookups return `Ok(None)` for a missing user rather than an error.
fn optional(result: AppResult<UserDto>) -> AppResult<Option<UserProfile>> {
    match result {
        Ok(dto) => Ok(Some(dto.into())),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

impl ProfileStore for HttpProfileStore {
    async fn get_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let request = self
            .api
            .request(Method::GET, &format!("/api/user/getUserByEmail/{email}"));
        optional(self.api.send_json(request).await)
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<Option<UserProfile>> {
        let request = self
            .api
            .request(Method::GET, &format!("/api/admin/documents/user/{id}"));
        optional(self.api.send_json(request).await)
    }

    async fn update(&self, profile: UserProfile) -> AppResult<UserProfile> {
        let body = UserDto::from(profile);
        let request = self.api.request(Method::PUT, "/api/user/update").json(&body);
        let dto: UserDto = self.api.send_json(request).await?;
        Ok(dto.into())
    }

    async fn find_all(&self) -> AppResult<Vec<UserProfile>> {
        let request = self.api.request(Method::GET, "/api/user/findAll");
        let dtos: Vec<UserDto> = self.api.send_json(request).await?;
        Ok(dtos.into_iter().map(UserProfile::from).collect())
    }

    async fn upload_document(
        &self,
        user: UserId,
        slot: DocumentSlot,
        content: Vec<u8>,
        filename: &str,
    ) -> AppResult<()> {
        let form = Form::new()
            .part("archivo", Part::bytes(content).file_name(filename.to_string()))
            .text("id", user.to_string());
        let request = self
            .api
            .request(Method::POST, upload_path(slot))
            .multipart(form);
        self.api.send(request).await?;
        Ok(())
    }
}
