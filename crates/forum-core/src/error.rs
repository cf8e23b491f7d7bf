//! Error types for the forum interception layer.
//!
//! This provides typed, structured error variants with automatic conversion
//! from common error types via the `From` trait. Every variant maps to a
//! response code so the web layer can turn any failure into a structured
//! error envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::FrequencyKind;
use crate::response::ResponseCode;

/// A shared error type for the entire interception layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ForumError {
    /// No authenticated identity in the current session
    #[error("not logged in")]
    Unauthorized,

    /// A declared parameter constraint was violated
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// The per-user daily threshold for an operation kind was reached
    #[error("daily limit reached for {kind}")]
    RateLimited { kind: FrequencyKind },

    /// Deliberate business-level failure raised by wrapped logic.
    ///
    /// The interceptor re-raises these unchanged instead of mapping them
    /// to an internal error.
    #[error("{message}")]
    Business { code: i32, message: String },

    /// Data access error (repository/storage layer)
    #[error("data access error: {0}")]
    DataAccess(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ForumError {
    /// Creates an InvalidParameter error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Creates a RateLimited error
    pub fn rate_limited(kind: FrequencyKind) -> Self {
        Self::RateLimited { kind }
    }

    /// Creates a Business error
    pub fn business(code: i32, message: impl Into<String>) -> Self {
        Self::Business {
            code,
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is an InvalidParameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this is a RateLimited error
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Whether this error is a deliberate rejection rather than an
    /// unexpected failure.
    ///
    /// Deliberate rejections (login missing, constraint violated, threshold
    /// reached, business rule) propagate out of the interceptor unchanged;
    /// everything else is reported as an internal error.
    pub fn is_interceptor_rejection(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::InvalidParameter { .. }
                | Self::RateLimited { .. }
                | Self::Business { .. }
        )
    }

    /// Maps this error to the response code sent back to the client.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Self::Unauthorized => ResponseCode::LoginTimeout,
            Self::InvalidParameter { .. } => ResponseCode::InvalidParameter,
            Self::RateLimited { .. } => ResponseCode::TooManyOperations,
            Self::Business { .. } => ResponseCode::InvalidParameter,
            _ => ResponseCode::ServerError,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ForumError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ForumError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (collaborator seams)
impl From<anyhow::Error> for ForumError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ForumError>`.
pub type Result<T> = std::result::Result<T, ForumError>;
