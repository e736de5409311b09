//! The login screen's two network sequences and the provider redirect.
//!
//! Every operation returns the `LoginAction` to dispatch, so the same code
//! runs behind the Dioxus page and in plain async tests.

use super::types::{LoginAction, LoginOutcome, LoginState, LoginView};
use super::validation::has_email_shape;
use crate::services::client::{
    current_time_millis, AuthBackend, AuthProvider, BackendClient, BrowserCredentialStore,
    CredentialStore, Credentials, PasswordLoginRequest, PreflightRequest, PreflightResponse,
    SessionFinalizer,
};
use crate::services::config::AppConfig;
use crate::services::errors::{LoginError, LoginErrorKind, LoginResult};
use crate::services::navigation::ExternalNavigator;
use crate::{console_error, console_info, console_warn};

/// Flow wired to the real backend and browser storage
pub type BrowserLoginFlow = LoginFlow<BackendClient, BrowserCredentialStore, BackendClient>;

pub struct LoginFlow<B, S, F> {
    backend: B,
    store: S,
    finalizer: F,
    config: AppConfig,
    clock: fn() -> u64,
}

impl BrowserLoginFlow {
    pub fn browser(config: AppConfig) -> Self {
        let client = BackendClient::new(config.clone());
        LoginFlow::new(client.clone(), BrowserCredentialStore::new(), client, config)
    }
}

impl<B, S, F> LoginFlow<B, S, F>
where
    B: AuthBackend,
    S: CredentialStore,
    F: SessionFinalizer,
{
    pub fn new(backend: B, store: S, finalizer: F, config: AppConfig) -> Self {
        Self {
            backend,
            store,
            finalizer,
            config,
            clock: current_time_millis,
        }
    }

    /// Replace the wall clock used to stamp token expiry
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check the email's shape and ask the backend how this user signs in
    pub async fn submit_email(&self, email: &str) -> LoginAction {
        match self.preflight(email).await {
            Ok(response) => LoginAction::PreflightSucceeded {
                email: email.to_string(),
                response,
            },
            Err(error) => Self::failed("preflight", error),
        }
    }

    async fn preflight(&self, email: &str) -> LoginResult<PreflightResponse> {
        if !has_email_shape(email) {
            return Err(LoginError::InputShapeInvalid);
        }

        let request = PreflightRequest {
            email: email.to_string(),
        };
        Ok(self.backend.preflight(&request).await?)
    }

    /// Log in as the email shown on the password screen and persist the resulting credentials
    pub async fn submit_password(&self, state: &LoginState) -> LoginAction {
        match self.password_login(state).await {
            Ok(outcome) => {
                console_info!("[Login] Signed in, redirecting to {}", outcome.target);
                LoginAction::LoginCompleted(outcome)
            }
            Err(error) => Self::failed("password login", error),
        }
    }

    // persist session -> persist refresh token (remember me) -> finalize -> redirect
    async fn password_login(&self, state: &LoginState) -> LoginResult<LoginOutcome> {
        // The preflighted email, not whatever the draft holds now
        let LoginView::PasswordEntry { email, .. } = &state.view else {
            return Err(LoginError::InputShapeInvalid);
        };
        let draft = &state.draft;

        let request = PasswordLoginRequest {
            email: email.clone(),
            password: draft.password.clone(),
            long_lived: draft.remember_me,
        };
        let response = self.backend.login(&request).await?;

        let credentials = Credentials::issued(
            response,
            (self.clock)(),
            self.config.access_token_expiry_offset_ms,
        );

        self.store.update_session(&credentials)?;
        if draft.remember_me {
            self.store.persist_refresh_token(&credentials)?;
        }

        let user = self.finalizer.finalize(&credentials).await?;

        Ok(LoginOutcome {
            credentials,
            user,
            target: self.config.post_login_route.clone(),
        })
    }

    /// Leave password entry (or provider selection) for email entry
    pub fn cancel_password_entry(&self) -> LoginAction {
        LoginAction::BackToEmailEntry
    }

    /// Identity provider login URL; `/1` asks the callback for a long-lived session
    pub fn provider_login_url(&self, provider: &AuthProvider, remember_me: bool) -> String {
        let mut target = self
            .config
            .endpoint(&format!("/auth/{}/login/ui", provider.id));
        if remember_me {
            target.push_str("/1");
        }
        target
    }

    /// Hand the whole page over to the identity provider
    pub fn select_provider(
        &self,
        provider: &AuthProvider,
        remember_me: bool,
        navigator: &impl ExternalNavigator,
    ) {
        let target = self.provider_login_url(provider, remember_me);
        console_info!("[Login] Using provider '{}'", provider.name);
        navigator.navigate_external(&target);
    }

    fn failed(operation: &str, error: LoginError) -> LoginAction {
        match error.kind() {
            LoginErrorKind::InputShapeInvalid => {
                console_warn!("[Login] {} skipped: {}", operation, error);
                LoginAction::InputRejected
            }
            LoginErrorKind::RequestFailed => {
                console_error!("[Login] {} failed: {}", operation, error);
                LoginAction::RequestFailed
            }
        }
    }
}
