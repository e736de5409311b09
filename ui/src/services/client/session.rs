use std::cell::RefCell;

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use super::traits::{CredentialStore, SessionReader};
use super::types::Credentials;
use crate::services::errors::StoreError;

const CREDENTIALS_KEY: &str = "booking.credentials";
const REFRESH_TOKEN_KEY: &str = "booking.refreshToken";

/// JSON value stored under one browser storage key
pub struct SessionManager {
    storage_key: String,
    use_session_storage: bool, // sessionStorage dies with the tab, localStorage survives restarts
}

impl SessionManager {
    /// Create a session manager backed by sessionStorage
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            use_session_storage: true,
        }
    }

    /// Create a session manager backed by localStorage
    pub fn new_persistent(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            use_session_storage: false,
        }
    }

    fn backend(&self) -> &'static str {
        if self.use_session_storage {
            "sessionStorage"
        } else {
            "localStorage"
        }
    }

    pub fn store<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;

        let result = if self.use_session_storage {
            SessionStorage::set(&self.storage_key, json)
        } else {
            LocalStorage::set(&self.storage_key, json)
        };

        result.map_err(|e| StoreError::Write {
            backend: self.backend(),
            key: self.storage_key.clone(),
            message: format!("{:?}", e),
        })
    }

    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let json = if self.use_session_storage {
            SessionStorage::get::<String>(&self.storage_key).ok()?
        } else {
            LocalStorage::get::<String>(&self.storage_key).ok()?
        };

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    "Discarding unreadable {} entry '{}': {}",
                    self.backend(),
                    self.storage_key,
                    e
                );
                None
            }
        }
    }
}

/// Credentials in sessionStorage, refresh token optionally mirrored to localStorage
pub struct BrowserCredentialStore {
    session: SessionManager,
    persistent: SessionManager,
}

impl BrowserCredentialStore {
    pub fn new() -> Self {
        Self {
            session: SessionManager::new(CREDENTIALS_KEY),
            persistent: SessionManager::new_persistent(REFRESH_TOKEN_KEY),
        }
    }
}

impl Default for BrowserCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn update_session(&self, credentials: &Credentials) -> Result<(), StoreError> {
        self.session.store(credentials)?;
        info!("Credentials stored in sessionStorage");
        Ok(())
    }

    fn persist_refresh_token(&self, credentials: &Credentials) -> Result<(), StoreError> {
        self.persistent.store(&credentials.refresh_token)?;
        info!("Refresh token persisted to localStorage");
        Ok(())
    }

    fn load_session(&self) -> Option<Credentials> {
        self.session.load()
    }
}

/// In-memory credential store for non-browser targets and tests
#[derive(Default)]
pub struct MemoryCredentialStore {
    session: RefCell<Option<Credentials>>,
    refresh_token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh token kept beyond the session, if one was persisted
    pub fn persisted_refresh_token(&self) -> Option<String> {
        self.refresh_token.borrow().clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn update_session(&self, credentials: &Credentials) -> Result<(), StoreError> {
        *self.session.borrow_mut() = Some(credentials.clone());
        Ok(())
    }

    fn persist_refresh_token(&self, credentials: &Credentials) -> Result<(), StoreError> {
        *self.refresh_token.borrow_mut() = Some(credentials.refresh_token.clone());
        Ok(())
    }

    fn load_session(&self) -> Option<Credentials> {
        self.session.borrow().clone()
    }
}

impl SessionReader for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.session.borrow().access_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_credentials() -> Credentials {
        Credentials {
            access_token: "access-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            access_token_expiry: 9_999_999_999_999,
        }
    }

    #[test]
    fn test_memory_store_session_and_refresh_token() {
        let store = MemoryCredentialStore::new();
        assert!(store.load_session().is_none());
        assert!(store.access_token().is_none());

        let credentials = create_test_credentials();
        store.update_session(&credentials).unwrap();
        assert_eq!(store.load_session(), Some(credentials.clone()));
        assert_eq!(store.access_token().as_deref(), Some("access-token"));
        assert!(store.persisted_refresh_token().is_none());

        store.persist_refresh_token(&credentials).unwrap();
        assert_eq!(
            store.persisted_refresh_token().as_deref(),
            Some("refresh-token")
        );
    }

    #[test]
    fn test_empty_access_token_is_no_session() {
        let mut credentials = create_test_credentials();
        credentials.access_token = String::new();
        assert!(Some(credentials).access_token().is_none());
        assert!(None::<Credentials>.access_token().is_none());
    }
}
