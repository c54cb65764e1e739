//! Shared HTTP client for the remote REST backend.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use trustbank_shared::config::ApiConfig;
use trustbank_shared::{AppError, AppResult};

/// HTTP client wrapper carrying the base URL and the bearer token.
///
/// One instance is shared by all stores of a session. Every request uses
/// the configured timeout; a timed-out or unreachable backend surfaces as
/// `AppError::Request` after a single attempt, no retry.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Installs the bearer token used for subsequent requests.
    pub fn set_token(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drops the bearer token (logout or forced re-login).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Joins a path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts an unauthenticated POST to an absolute URL. The token
    /// endpoint lives outside the API base URL.
    pub(crate) fn post_absolute(&self, url: &str) -> RequestBuilder {
        self.http.post(url)
    }

    /// Starts a request with the bearer header attached when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and maps transport and status failures onto the
    /// application error taxonomy.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            let mapped = map_transport_error(e);
            tracing::warn!(error = %mapped, "request failed");
            mapped
        })?;
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "response received");
        if status.is_success() {
            Ok(response)
        } else {
            Err(map_status(status, response.text().await.unwrap_or_default()))
        }
    }

    /// Sends a request and decodes the JSON response body.
    pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(builder).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::Request(format!("malformed response body: {e}")))
    }
}

fn map_transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Request("request timed out".to_string())
    } else {
        AppError::Request(e.to_string())
    }
}

/// Maps an HTTP status onto the error taxonomy. 401 forces a re-login at
/// the top level; 5xx is reported to the user without retry.
fn map_status(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized("session expired or missing".into()),
        StatusCode::FORBIDDEN => AppError::Forbidden("insufficient role".into()),
        StatusCode::NOT_FOUND => AppError::NotFound(body),
        s if s.is_client_error() => AppError::Validation(body),
        s => AppError::Request(format!("server returned {s}")),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "https://bank.example.com:8081/".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let api = client();
        assert_eq!(
            api.url("/api/transaction/save"),
            "https://bank.example.com:8081/api/transaction/save"
        );
        assert_eq!(
            api.url("api/user/findAll"),
            "https://bank.example.com:8081/api/user/findAll"
        );
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, "UNAUTHORIZED")]
    #[case(StatusCode::FORBIDDEN, "FORBIDDEN")]
    #[case(StatusCode::NOT_FOUND, "NOT_FOUND")]
    #[case(StatusCode::BAD_REQUEST, "VALIDATION_ERROR")]
    #[case(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "REQUEST_ERROR")]
    #[case(StatusCode::BAD_GATEWAY, "REQUEST_ERROR")]
    fn test_status_mapping(#[case] status: StatusCode, #[case] code: &str) {
        assert_eq!(map_status(status, String::new()).error_code(), code);
    }

    #[test]
    fn test_unauthorized_response_forces_reauth() {
        assert!(map_status(StatusCode::UNAUTHORIZED, String::new()).requires_reauth());
        assert!(!map_status(StatusCode::FORBIDDEN, String::new()).requires_reauth());
    }

    #[test]
    fn test_token_install_and_clear() {
        let api = client();
        assert!(api.token.read().unwrap().is_none());
        api.set_token("abc".into());
        assert_eq!(api.token.read().unwrap().as_deref(), Some("abc"));
        api.clear_token();
        assert!(api.token.read().unwrap().is_none());
    }
}
