use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::error;

use super::errors::{ClientError, ClientResult};
use super::traits::{AuthBackend, SessionFinalizer};
use super::types::*;
use crate::services::config::AppConfig;

/// Client for the booking backend's authentication endpoints
#[derive(Clone)]
pub struct BackendClient {
    pub(crate) http_client: Client,
    pub(crate) config: AppConfig,
}

impl BackendClient {
    /// Create a new backend client for the configured backend URL
    pub fn new(config: AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http_client
            .post(self.config.endpoint(path))
            .header("Content-Type", "application/json")
    }

    pub(crate) fn get_authorized(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.http_client
            .get(self.config.endpoint(path))
            .header("Authorization", format!("Bearer {}", access_token))
    }

    /// Send a request and decode a 2xx JSON body, keeping the backend's error text otherwise
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await.map_err(|e| ClientError::Network {
            message: format!("Failed to call {}: {}", endpoint, e),
        })?;

        decode_response(endpoint, response).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| ClientError::Network {
        message: format!("Failed to read {} response: {}", endpoint, e),
    })?;

    if !status.is_success() {
        error!("{} failed with status {}: {}", endpoint, status, body);
        return Err(ClientError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl AuthBackend for BackendClient {
    async fn preflight(&self, request: &PreflightRequest) -> ClientResult<PreflightResponse> {
        crate::services::client::auth::preflight_impl(self, request).await
    }

    async fn login(&self, request: &PasswordLoginRequest) -> ClientResult<PasswordLoginResponse> {
        crate::services::client::auth::password_login_impl(self, request).await
    }
}

#[async_trait(?Send)]
impl SessionFinalizer for BackendClient {
    async fn finalize(&self, credentials: &Credentials) -> ClientResult<UserContext> {
        crate::services::client::auth::fetch_user_context_impl(self, &credentials.access_token)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(AppConfig::default().with_backend_url(&server.uri()))
    }

    #[tokio::test]
    async fn test_preflight_posts_email_and_decodes_response() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/preflight"))
            .and(matchers::body_json(serde_json::json!({ "email": "jane@acme.test" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organization": { "id": "org-1", "name": "Acme" },
                "authProviders": [],
                "requirePassword": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = AuthBackend::preflight(
            &client,
            &PreflightRequest {
                email: "jane@acme.test".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(response.require_password);
        assert_eq!(response.organization.name, "Acme");
        assert_eq!(response.auth_providers, Some(vec![]));
    }

    #[tokio::test]
    async fn test_login_sends_long_lived_flag() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/login"))
            .and(matchers::body_json(serde_json::json!({
                "email": "jane@acme.test",
                "password": "correct horse",
                "longLived": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "access-1",
                "refreshToken": "refresh-1"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = AuthBackend::login(
            &client,
            &PasswordLoginRequest {
                email: "jane@acme.test".to_string(),
                password: "correct horse".to_string(),
                long_lived: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.access_token, "access-1");
        assert_eq!(response.refresh_token, "refresh-1");
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let error = AuthBackend::login(
            &client,
            &PasswordLoginRequest {
                email: "jane@acme.test".to_string(),
                password: "wrong password".to_string(),
                long_lived: false,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(error.status(), Some(401));
        assert!(error.to_string().contains("invalid credentials"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/preflight"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let error = AuthBackend::preflight(
            &client,
            &PreflightRequest {
                email: "jane@acme.test".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(error, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_finalize_fetches_user_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("GET"))
            .and(matchers::path("/user/me"))
            .and(matchers::header("Authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "user-1",
                "email": "jane@acme.test",
                "organizationId": "org-1",
                "role": 1
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client
            .finalize(&Credentials {
                access_token: "access-1".to_string(),
                refresh_token: "refresh-1".to_string(),
                access_token_expiry: 0,
            })
            .await
            .unwrap();

        assert_eq!(user.email, "jane@acme.test");
        assert_eq!(user.organization_id, "org-1");
    }
}
