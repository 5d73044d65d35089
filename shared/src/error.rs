use thiserror::Error;

/// Failures surfaced by the HTTP client.
///
/// The dashboard never interprets these beyond "keep the previous data";
/// the profile page turns them into an error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid appointment date: {value}")]
    InvalidDate { value: String },

    #[error("session is missing or expired")]
    Unauthenticated,
}

impl ApiError {
    /// Map a non-2xx response to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => ApiError::Unauthenticated,
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }
}
