//! OAuth password-grant login against the identity provider.

use std::sync::Arc;

use trustbank_core::session::context::SessionContext;
use trustbank_core::session::types::Principal;
use trustbank_shared::auth::{Claims, TokenError, TokenResponse};
use trustbank_shared::config::AuthConfig;
use trustbank_shared::{AppError, AppResult};

use crate::api::ApiClient;

/// Exchanges credentials for a bearer token and opens a session.
///
/// On success the token is installed on the shared [`ApiClient`], so every
/// store request after login carries it.
pub struct AuthProvider {
    api: Arc<ApiClient>,
    config: AuthConfig,
}

impl AuthProvider {
    /// Creates a provider over a shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>, config: AuthConfig) -> Self {
        Self { api, config }
    }

    /// Runs the password grant and opens a session for the principal
    /// carried in the returned token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` for rejected credentials or an
    /// unusable token, and `AppError::Request` when the identity provider
    /// is unreachable.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<SessionContext> {
        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        let request = self
            .api
            .post_absolute(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&form);
        let token: TokenResponse = self.api.send_json(request).await?;

        let session = session_from_token(&token.access_token)?;
        self.api.set_token(token.access_token);
        tracing::info!(user = %session.user_id(), admin = session.is_admin(), "session opened");
        Ok(session)
    }

    /// Ends the session and drops the installed token.
    pub fn logout(&self, session: SessionContext) {
        tracing::info!(user = %session.user_id(), "session closed");
        self.api.clear_token();
        session.close();
    }
}

/// Reads the principal out of an access token.
fn session_from_token(access_token: &str) -> AppResult<SessionContext> {
    let claims = Claims::from_token(access_token).map_err(|e| match e {
        TokenError::Expired => AppError::Unauthorized("access token already expired".into()),
        TokenError::Invalid(msg) => AppError::Unauthorized(format!("unusable access token: {msg}")),
    })?;
    let principal = Principal::from_claims(&claims)
        .ok_or_else(|| AppError::Unauthorized("token carries no recognized role".into()))?;
    Ok(SessionContext::new(principal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use rust_decimal_macros::dec;
    use trustbank_core::session::types::Role;
    use trustbank_shared::types::UserId;

    fn token_for(role: &str) -> String {
        let claims = Claims::new(
            UserId::from_raw(7),
            role,
            dec!(150.00),
            Utc::now() + Duration::hours(1),
        );
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_session_from_token_carries_the_principal() {
        let session = session_from_token(&token_for("ROLE_ADMIN")).unwrap();
        assert_eq!(session.user_id(), UserId::from_raw(7));
        assert!(session.is_admin());
        assert_eq!(session.principal().balance, dec!(150.00));
        assert_eq!(session.principal().role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(matches!(
            session_from_token(&token_for("ROLE_AUDITOR")),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            session_from_token("not.a.jwt"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
