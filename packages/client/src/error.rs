// ABOUTME: Error types for the API client and user service
// ABOUTME: Separates transport, server-reported, session-expiry, schema, storage and setup failures

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::api::ApiResponse;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl ClientError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an API error from a non-2xx response body.
    ///
    /// The backend puts the human readable error in the envelope's `data`
    /// field; the raw body and finally the status line are fallbacks.
    pub fn from_error_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiResponse<Value>>(body)
            .ok()
            .and_then(|envelope| envelope.error_payload())
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| status.to_string());

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::SessionExpired => Some(StatusCode::BAD_REQUEST.as_u16()),
            _ => None,
        }
    }

    /// Text shown to the user when an operation fails
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Network(msg) => format!("Could not reach the server: {}", msg),
            other => other.to_string(),
        }
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ClientError::SessionExpired | ClientError::Api { status: 401, .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
