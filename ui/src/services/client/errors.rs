use thiserror::Error;

/// Booking backend call errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Transport failed before a response arrived
    #[error("Network error: {message}")]
    Network { message: String },

    /// Backend answered with a non-2xx status
    #[error("Backend returned {status} for {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ClientError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
