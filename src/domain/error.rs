use thiserror::Error;

/// Library-wide error type for nova operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Governance API request failed at the transport or HTTP level.
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
    },

    /// Server responded but the body did not match the expected shape.
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
