//! Seams between the login flow and the browser.
//!
//! All traits are WASM-first: async methods are `?Send` and implementations
//! are expected to live on the single UI thread.

use std::rc::Rc;

use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::{
    Credentials, PasswordLoginRequest, PasswordLoginResponse, PreflightRequest,
    PreflightResponse, UserContext,
};
use crate::services::errors::StoreError;

/// The two authentication endpoints of the booking backend
#[async_trait(?Send)]
pub trait AuthBackend {
    /// `POST /auth/preflight`
    async fn preflight(&self, request: &PreflightRequest) -> ClientResult<PreflightResponse>;

    /// `POST /auth/login`
    async fn login(&self, request: &PasswordLoginRequest) -> ClientResult<PasswordLoginResponse>;
}

/// Post-login step that loads the signed-in user's context
#[async_trait(?Send)]
pub trait SessionFinalizer {
    async fn finalize(&self, credentials: &Credentials) -> ClientResult<UserContext>;
}

/// Client-side credential persistence
pub trait CredentialStore {
    /// Write the full credentials to the session-scoped store
    fn update_session(&self, credentials: &Credentials) -> Result<(), StoreError>;

    /// Keep the refresh token beyond the browser session
    fn persist_refresh_token(&self, credentials: &Credentials) -> Result<(), StoreError>;

    /// Credentials of the current browser session, if any
    fn load_session(&self) -> Option<Credentials>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for Rc<T> {
    fn update_session(&self, credentials: &Credentials) -> Result<(), StoreError> {
        (**self).update_session(credentials)
    }

    fn persist_refresh_token(&self, credentials: &Credentials) -> Result<(), StoreError> {
        (**self).persist_refresh_token(credentials)
    }

    fn load_session(&self) -> Option<Credentials> {
        (**self).load_session()
    }
}

/// Read access to whoever currently holds the session
pub trait SessionReader {
    fn access_token(&self) -> Option<String>;
}

impl SessionReader for Option<Credentials> {
    fn access_token(&self) -> Option<String> {
        self.as_ref()
            .map(|c| c.access_token.clone())
            .filter(|token| !token.is_empty())
    }
}
