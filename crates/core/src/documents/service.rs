//! Document approval service.
//!
//! Implements the per-slot state machine on top of the profile store:
//! Unsubmitted -> Pending (upload) -> Approved | Rejected (admin decision),
//! with Rejected -> Pending allowed on re-upload.

use std::sync::Arc;

use trustbank_shared::types::UserId;

use crate::documents::error::DocumentError;
use crate::documents::types::{
    DecisionOutcome, DocumentApprovalState, DocumentSlot, DocumentStats, SlotStatus,
};
use crate::profile::{ProfileStore, UserProfile};
use crate::session::context::SessionContext;

/// Service managing the three document approval slots per user.
///
/// Every mutation reads the full profile record and writes it back through
/// a single `update` call, so two concurrent single-slot decisions merge
/// instead of overwriting each other.
pub struct DocumentService<S: ProfileStore> {
    store: Arc<S>,
}

impl<S: ProfileStore> DocumentService<S> {
    /// Creates a new document service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Uploads a document and moves its slot to `Pending`.
    ///
    /// Allowed from `Unsubmitted`, `Rejected` (re-upload after rejection)
    /// and `Pending` (replacing a not-yet-decided upload). An approved slot
    /// is never reopened here; resubmission policy is the caller's.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user, `InvalidTransition` for
    /// an approved slot, or the store failure.
    pub async fn submit(
        &self,
        user: UserId,
        slot: DocumentSlot,
        content: Vec<u8>,
        filename: &str,
    ) -> Result<DocumentApprovalState, DocumentError> {
        let mut profile = self.fetch(user).await?;

        let current = profile.documents.slot(slot);
        if current == SlotStatus::Approved {
            return Err(DocumentError::InvalidTransition {
                slot,
                from: current,
                to: SlotStatus::Pending,
            });
        }

        self.store
            .upload_document(user, slot, content, filename)
            .await?;

        profile.documents.set_slot(slot, SlotStatus::Pending);
        let updated = self.store.update(profile).await?;
        Ok(updated.documents)
    }

    /// Records an admin decision on exactly one slot.
    ///
    /// Repeating the same decision is a no-op with no store write.
    /// Reversing an earlier decision is allowed; deciding a slot that was
    /// never submitted is not.
    ///
    /// # Errors
    ///
    /// Returns the session error for non-admin callers, `UserNotFound` for
    /// an unknown user, `InvalidTransition` for an unsubmitted slot, or the
    /// store failure.
    pub async fn decide(
        &self,
        session: &SessionContext,
        user: UserId,
        slot: DocumentSlot,
        outcome: DecisionOutcome,
    ) -> Result<DocumentApprovalState, DocumentError> {
        session.require_admin()?;

        let mut profile = self.fetch(user).await?;

        let current = profile.documents.slot(slot);
        let target = SlotStatus::from(outcome);

        if current == target {
            // Idempotent: the decision already stands.
            return Ok(profile.documents);
        }
        if current == SlotStatus::Unsubmitted {
            return Err(DocumentError::InvalidTransition {
                slot,
                from: current,
                to: target,
            });
        }

        profile.documents.set_slot(slot, target);
        let updated = self.store.update(profile).await?;
        Ok(updated.documents)
    }

    /// Lists the users holding at least one pending document slot.
    ///
    /// # Errors
    ///
    /// Admin-only; returns the session error or the store failure.
    pub async fn users_with_pending(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<UserProfile>, DocumentError> {
        session.require_admin()?;
        let users = self.store.find_all().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.documents.has_pending())
            .collect())
    }

    /// Aggregates slot counts across all users.
    ///
    /// # Errors
    ///
    /// Admin-only; returns the session error or the store failure.
    pub async fn stats(&self, session: &SessionContext) -> Result<DocumentStats, DocumentError> {
        session.require_admin()?;
        let users = self.store.find_all().await?;
        Ok(users
            .iter()
            .fold(DocumentStats::default(), |mut acc, u| {
                acc.total_users += 1;
                acc.pending += u.documents.count(SlotStatus::Pending);
                acc.approved += u.documents.count(SlotStatus::Approved);
                acc.rejected += u.documents.count(SlotStatus::Rejected);
                acc
            }))
    }

    async fn fetch(&self, user: UserId) -> Result<UserProfile, DocumentError> {
        self.store
            .get_by_id(user)
            .await?
            .ok_or(DocumentError::UserNotFound(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::{Principal, Role};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use trustbank_shared::{AppError, AppResult};

    /// In-memory profile store counting update calls.
    struct MemoryProfiles {
        users: Mutex<HashMap<UserId, UserProfile>>,
        updates: Mutex<usize>,
    }

    impl MemoryProfiles {
        fn with(profiles: Vec<UserProfile>) -> Self {
            Self {
                users: Mutex::new(profiles.into_iter().map(|p| (p.id, p)).collect()),
                updates: Mutex::new(0),
            }
        }

        fn update_count(&self) -> usize {
            *self.updates.lock().unwrap()
        }
    }

    impl ProfileStore for MemoryProfiles {
        async fn get_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn get_by_id(&self, id: UserId) -> AppResult<Option<UserProfile>> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn update(&self, profile: UserProfile) -> AppResult<UserProfile> {
            let mut users = self.users.lock().unwrap();
            if !users.contains_key(&profile.id) {
                return Err(AppError::NotFound(profile.id.to_string()));
            }
            *self.updates.lock().unwrap() += 1;
            users.insert(profile.id, profile.clone());
            Ok(profile)
        }

        async fn find_all(&self) -> AppResult<Vec<UserProfile>> {
            let mut users: Vec<_> = self.users.lock().unwrap().values().cloned().collect();
            users.sort_by_key(|u| u.id);
            Ok(users)
        }

        async fn upload_document(
            &self,
            _user: UserId,
            _slot: DocumentSlot,
            _content: Vec<u8>,
            _filename: &str,
        ) -> AppResult<()> {
            Ok(())
        }
    }

    fn profile(id: i64) -> UserProfile {
        UserProfile {
            id: UserId::from_raw(id),
            email: format!("user{id}@example.com"),
            first_name: "Test".into(),
            last_name: "User".into(),
            balance: dec!(100.00),
            role: Role::User,
            documents: DocumentApprovalState::default(),
        }
    }

    fn admin_session() -> SessionContext {
        SessionContext::new(Principal::new(UserId::from_raw(99), Role::Admin, dec!(0)))
    }

    fn user_session() -> SessionContext {
        SessionContext::new(Principal::new(UserId::from_raw(1), Role::User, dec!(0)))
    }

    fn service(profiles: Vec<UserProfile>) -> (DocumentService<MemoryProfiles>, Arc<MemoryProfiles>) {
        let store = Arc::new(MemoryProfiles::with(profiles));
        (DocumentService::new(Arc::clone(&store)), store)
    }

    #[tokio::test]
    async fn test_submit_moves_slot_to_pending() {
        let (svc, _) = service(vec![profile(1)]);
        let state = svc
            .submit(UserId::from_raw(1), DocumentSlot::Photo, vec![1, 2], "photo.jpg")
            .await
            .unwrap();
        assert_eq!(state.photo, SlotStatus::Pending);
        assert_eq!(state.id_front, SlotStatus::Unsubmitted);
        assert_eq!(state.id_back, SlotStatus::Unsubmitted);
    }

    #[tokio::test]
    async fn test_submit_unknown_user_fails() {
        let (svc, _) = service(vec![]);
        let err = svc
            .submit(UserId::from_raw(7), DocumentSlot::Photo, vec![], "x.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_rejected_slot_can_be_resubmitted() {
        let mut p = profile(1);
        p.documents.set_slot(DocumentSlot::Photo, SlotStatus::Rejected);
        let (svc, _) = service(vec![p]);

        let state = svc
            .submit(UserId::from_raw(1), DocumentSlot::Photo, vec![3], "retry.jpg")
            .await
            .unwrap();
        assert_eq!(state.photo, SlotStatus::Pending);
    }

    #[tokio::test]
    async fn test_approved_slot_cannot_be_resubmitted() {
        let mut p = profile(1);
        p.documents.set_slot(DocumentSlot::Photo, SlotStatus::Approved);
        let (svc, _) = service(vec![p]);

        let err = svc
            .submit(UserId::from_raw(1), DocumentSlot::Photo, vec![], "x.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_decide_requires_admin() {
        let (svc, _) = service(vec![profile(1)]);
        let err = svc
            .decide(
                &user_session(),
                UserId::from_raw(1),
                DocumentSlot::Photo,
                DecisionOutcome::Approved,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Session(_)));
    }

    #[tokio::test]
    async fn test_decide_mutates_only_named_slot() {
        let mut p = profile(1);
        p.documents.set_slot(DocumentSlot::Photo, SlotStatus::Pending);
        p.documents.set_slot(DocumentSlot::IdFront, SlotStatus::Pending);
        let (svc, _) = service(vec![p]);

        let state = svc
            .decide(
                &admin_session(),
                UserId::from_raw(1),
                DocumentSlot::Photo,
                DecisionOutcome::Rejected,
            )
            .await
            .unwrap();
        assert_eq!(state.photo, SlotStatus::Rejected);
        assert_eq!(state.id_front, SlotStatus::Pending);
        assert_eq!(state.id_back, SlotStatus::Unsubmitted);
    }

    #[tokio::test]
    async fn test_decide_is_idempotent_without_second_write() {
        let mut p = profile(1);
        p.documents.set_slot(DocumentSlot::Photo, SlotStatus::Pending);
        let (svc, store) = service(vec![p]);
        let session = admin_session();
        let user = UserId::from_raw(1);

        svc.decide(&session, user, DocumentSlot::Photo, DecisionOutcome::Approved)
            .await
            .unwrap();
        assert_eq!(store.update_count(), 1);

        let state = svc
            .decide(&session, user, DocumentSlot::Photo, DecisionOutcome::Approved)
            .await
            .unwrap();
        assert_eq!(state.photo, SlotStatus::Approved);
        assert_eq!(store.update_count(), 1, "repeat decision must not write");
    }

    #[tokio::test]
    async fn test_decide_unsubmitted_slot_fails() {
        let (svc, _) = service(vec![profile(1)]);
        let err = svc
            .decide(
                &admin_session(),
                UserId::from_raw(1),
                DocumentSlot::IdBack,
                DecisionOutcome::Approved,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_photo_slot_full_lifecycle() {
        // start {UNSUBMITTED,UNSUBMITTED,UNSUBMITTED}; submit(photo) ->
        // PENDING; decide(photo, REJECTED) -> REJECTED; submit(photo) ->
        // PENDING again. Other slots never move.
        let (svc, _) = service(vec![profile(1)]);
        let session = admin_session();
        let user = UserId::from_raw(1);

        let s1 = svc
            .submit(user, DocumentSlot::Photo, vec![1], "p.jpg")
            .await
            .unwrap();
        assert_eq!(
            (s1.photo, s1.id_front, s1.id_back),
            (SlotStatus::Pending, SlotStatus::Unsubmitted, SlotStatus::Unsubmitted)
        );

        let s2 = svc
            .decide(&session, user, DocumentSlot::Photo, DecisionOutcome::Rejected)
            .await
            .unwrap();
        assert_eq!(
            (s2.photo, s2.id_front, s2.id_back),
            (SlotStatus::Rejected, SlotStatus::Unsubmitted, SlotStatus::Unsubmitted)
        );

        let s3 = svc
            .submit(user, DocumentSlot::Photo, vec![2], "p2.jpg")
            .await
            .unwrap();
        assert_eq!(
            (s3.photo, s3.id_front, s3.id_back),
            (SlotStatus::Pending, SlotStatus::Unsubmitted, SlotStatus::Unsubmitted)
        );
    }

    #[tokio::test]
    async fn test_users_with_pending_filters() {
        let mut p1 = profile(1);
        p1.documents.set_slot(DocumentSlot::Photo, SlotStatus::Pending);
        let p2 = profile(2);
        let (svc, _) = service(vec![p1, p2]);

        let pending = svc.users_with_pending(&admin_session()).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, UserId::from_raw(1));
    }

    #[tokio::test]
    async fn test_stats_aggregates_all_slots() {
        let mut p1 = profile(1);
        p1.documents.set_slot(DocumentSlot::Photo, SlotStatus::Approved);
        p1.documents.set_slot(DocumentSlot::IdFront, SlotStatus::Pending);
        let mut p2 = profile(2);
        p2.documents.set_slot(DocumentSlot::IdBack, SlotStatus::Rejected);
        let (svc, _) = service(vec![p1, p2]);

        let stats = svc.stats(&admin_session()).await.unwrap();
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
    }
}
