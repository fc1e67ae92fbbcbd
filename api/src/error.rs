//! Error taxonomy for API calls and configuration.

/// Shown when the server rejects the session with `401`.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Shown when nothing more specific is known about a failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered `401`; the session has already been cleared.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// The server answered with a non-success status.
    #[error("server error: status {status}")]
    Server { status: u16, message: Option<String> },

    /// No response was received (network failure, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message carried in the server's error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text surfaced to the user in a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Transport(detail) if !detail.trim().is_empty() => format!("Network error: {detail}"),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Errors raised while reading [`crate::ApiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
