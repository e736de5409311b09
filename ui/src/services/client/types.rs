use serde::{Deserialize, Serialize};

/// Get current time in milliseconds since UNIX epoch (WASM compatible)
#[cfg(target_arch = "wasm32")]
pub fn current_time_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Organization resolved by the preflight call. Only the name is shown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub language: String,
    pub contact_firstname: String,
    pub contact_lastname: String,
    pub contact_email: String,
}

/// External identity provider offered for the email's organization
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthProvider {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct PreflightRequest {
    pub email: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreflightResponse {
    #[serde(default)]
    pub organization: Organization,
    #[serde(default)]
    pub auth_providers: Option<Vec<AuthProvider>>,
    #[serde(default)]
    pub require_password: bool,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PasswordLoginRequest {
    pub email: String,
    pub password: String,
    pub long_lived: bool,
}

impl std::fmt::Debug for PasswordLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordLoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("long_lived", &self.long_lived)
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordLoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Tokens issued by a successful login, with the absolute access token expiry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    /// Milliseconds since UNIX epoch
    pub access_token_expiry: u64,
}

impl Credentials {
    /// Build credentials from a login response, expiring `offset_ms` after `now_ms`
    pub fn issued(response: PasswordLoginResponse, now_ms: u64, offset_ms: u64) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            access_token_expiry: now_ms.saturating_add(offset_ms),
        }
    }
}

/// Signed-in user as reported by `GET /user/me`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    pub id: String,
    pub email: String,
    pub organization_id: String,
    pub role: u8,
}
