use thiserror::Error;

use crate::services::client::ClientError;

/// What the login screen can tell the user. All backend and storage detail
/// collapses into `RequestFailed`; the detail itself only goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginErrorKind {
    /// Email rejected locally before any request was made
    InputShapeInvalid,
    /// Preflight, login, persistence or finalization failed
    RequestFailed,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Email address must contain exactly one '@'")]
    InputShapeInvalid,

    #[error("Backend request failed: {0}")]
    Client(#[from] ClientError),

    #[error("Credential storage failed: {0}")]
    Store(#[from] StoreError),
}

impl LoginError {
    pub fn kind(&self) -> LoginErrorKind {
        match self {
            LoginError::InputShapeInvalid => LoginErrorKind::InputShapeInvalid,
            LoginError::Client(_) | LoginError::Store(_) => LoginErrorKind::RequestFailed,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize credentials: {message}")]
    Serialization { message: String },

    #[error("Failed to write '{key}' to {backend}: {message}")]
    Write {
        backend: &'static str,
        key: String,
        message: String,
    },
}

pub type LoginResult<T> = Result<T, LoginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_failure_collapses_to_two_kinds() {
        assert_eq!(
            LoginError::InputShapeInvalid.kind(),
            LoginErrorKind::InputShapeInvalid
        );

        let client = LoginError::from(ClientError::Network {
            message: "connection refused".to_string(),
        });
        assert_eq!(client.kind(), LoginErrorKind::RequestFailed);

        let store = LoginError::from(StoreError::Write {
            backend: "sessionStorage",
            key: "booking.credentials".to_string(),
            message: "quota exceeded".to_string(),
        });
        assert_eq!(store.kind(), LoginErrorKind::RequestFailed);
    }

    #[test]
    fn test_error_messages_keep_detail_for_logging() {
        let error = LoginError::from(ClientError::Status {
            endpoint: "/auth/login".to_string(),
            status: 401,
            body: "bad credentials".to_string(),
        });
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("bad credentials"));
    }
}
