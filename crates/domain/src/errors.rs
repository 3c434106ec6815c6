//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for RFShop
///
/// Every core operation either resolves to a value or fails with one of
/// these. The UI collaborator decides how to present them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShopError {
    /// The backend answered with a non-success HTTP status.
    #[error("{status}: {message}")]
    Request {
        /// HTTP status code returned by the backend
        status: u16,
        /// Best-effort message (structured error body or status text)
        message: String,
    },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Security error: {message}")]
    Security { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ShopError {
    /// Build a [`ShopError::Request`].
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request { status, message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::Security { message: message.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// HTTP-like status code for the failure, if the backend produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for RFShop operations
pub type Result<T> = std::result::Result<T, ShopError>;
