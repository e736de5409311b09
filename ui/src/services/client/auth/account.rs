use tracing::{info, instrument};

use crate::services::client::types::UserContext;
use crate::services::client::{BackendClient, ClientError};

/// Load the signed-in user's context with a fresh access token
#[instrument(level = "debug", skip(client, access_token), err)]
pub async fn fetch_user_context_impl(
    client: &BackendClient,
    access_token: &str,
) -> Result<UserContext, ClientError> {
    let user: UserContext = client
        .send_json("/user/me", client.get_authorized("/user/me", access_token))
        .await?;

    info!("Loaded user context (organization: {})", user.organization_id);
    Ok(user)
}
