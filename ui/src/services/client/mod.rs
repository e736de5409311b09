// Client-side access to the booking backend
//
// This module provides:
// - The preflight and password login calls
// - User context loading after login
// - Credential storage in sessionStorage/localStorage
//
// Everything behind a trait in `traits` so the login flow can run against
// in-memory doubles.

pub mod auth;
pub mod backend_client;
pub mod errors;
pub mod session;
pub mod traits;
pub mod types;

// Re-export core types for easy access
pub use types::{
    current_time_millis, AuthProvider, Credentials, Organization, PasswordLoginRequest,
    PasswordLoginResponse, PreflightRequest, PreflightResponse, UserContext,
};

pub use backend_client::BackendClient;
pub use errors::{ClientError, ClientResult};
pub use session::{BrowserCredentialStore, MemoryCredentialStore, SessionManager};
pub use traits::{AuthBackend, CredentialStore, SessionFinalizer, SessionReader};
