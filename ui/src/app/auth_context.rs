use dioxus::prelude::*;

use crate::features::login::LoginOutcome;
use crate::services::client::{
    BrowserCredentialStore, CredentialStore, Credentials, SessionReader, UserContext,
};

/// The signed-in session shared by every page.
///
/// Provided once at the app root and handed to the login page as its
/// `SessionReader`, so route guards never read storage directly.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    credentials: Signal<Option<Credentials>>,
    user: Signal<Option<UserContext>>,
}

impl AuthContext {
    /// Pick up credentials a previous page load left in sessionStorage
    pub fn restore() -> Self {
        Self::with_credentials(BrowserCredentialStore::new().load_session())
    }

    pub fn with_credentials(credentials: Option<Credentials>) -> Self {
        Self {
            credentials: Signal::new(credentials),
            user: Signal::new(None),
        }
    }

    pub fn sign_in(&mut self, outcome: &LoginOutcome) {
        self.credentials.set(Some(outcome.credentials.clone()));
        self.user.set(Some(outcome.user.clone()));
    }

    pub fn user(&self) -> Option<UserContext> {
        self.user.read().clone()
    }
}

impl SessionReader for AuthContext {
    fn access_token(&self) -> Option<String> {
        self.credentials.read().access_token()
    }
}
