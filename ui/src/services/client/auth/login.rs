use tracing::{debug, info, instrument, warn};

use crate::services::client::types::*;
use crate::services::client::{BackendClient, ClientError};

/// Discover how the organization behind an email wants its users to sign in
#[instrument(level = "debug", skip(client), err)]
pub async fn preflight_impl(
    client: &BackendClient,
    request: &PreflightRequest,
) -> Result<PreflightResponse, ClientError> {
    debug!("Running preflight for: {}", request.email);

    let response: PreflightResponse = client
        .send_json("/auth/preflight", client.post("/auth/preflight").json(request))
        .await?;

    info!(
        "Preflight resolved organization '{}' (require password: {}, providers: {})",
        response.organization.name,
        response.require_password,
        response.auth_providers.as_ref().map_or(0, Vec::len)
    );

    Ok(response)
}

/// Password login; the backend issues a refresh token either way and
/// `long_lived` only controls its lifetime
#[instrument(level = "debug", skip(client), err)]
pub async fn password_login_impl(
    client: &BackendClient,
    request: &PasswordLoginRequest,
) -> Result<PasswordLoginResponse, ClientError> {
    debug!(
        "Logging in {} (long lived: {})",
        request.email, request.long_lived
    );

    let response: PasswordLoginResponse = client
        .send_json("/auth/login", client.post("/auth/login").json(request))
        .await?;

    if response.access_token.is_empty() || response.refresh_token.is_empty() {
        warn!("Login succeeded but no session tokens provided");
        return Err(ClientError::Decode {
            endpoint: "/auth/login".to_string(),
            message: "Login succeeded but no session tokens provided".to_string(),
        });
    }

    info!("Login successful (long lived: {})", request.long_lived);
    Ok(response)
}
