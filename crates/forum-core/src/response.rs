//! Response envelope returned by wrapped operations.
//!
//! Wrapped operations report their outcome through a status convention, not
//! an exception: only an envelope carrying the success status triggers
//! post-operation bookkeeping such as frequency counter increments.

use serde::{Deserialize, Serialize};

use crate::error::ForumError;

/// Status string carried by successful envelopes.
pub const STATUS_SUCCESS: &str = "success";
/// Status string carried by error envelopes.
pub const STATUS_ERROR: &str = "error";

/// Well-known response codes for client-facing outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseCode {
    Ok,
    NotFound,
    ServerError,
    InvalidParameter,
    AlreadyExists,
    TooManyOperations,
    LoginTimeout,
}

impl ResponseCode {
    /// Numeric code sent on the wire.
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::ServerError => 500,
            Self::InvalidParameter => 600,
            Self::AlreadyExists => 601,
            Self::TooManyOperations => 602,
            Self::LoginTimeout => 901,
        }
    }

    /// Default human-readable message for this code.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "request successful",
            Self::NotFound => "requested address does not exist",
            Self::ServerError => "server error, please contact the administrator",
            Self::InvalidParameter => "invalid request parameter",
            Self::AlreadyExists => "information already exists",
            Self::TooManyOperations => "too many operations today, try again tomorrow",
            Self::LoginTimeout => "login timed out, please log in again",
        }
    }
}

/// Generic response envelope `{ status, code, info, data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseVo<T> {
    pub status: String,
    pub code: i32,
    pub info: String,
    pub data: Option<T>,
}

impl<T> ResponseVo<T> {
    /// Builds a success envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            code: ResponseCode::Ok.code(),
            info: ResponseCode::Ok.message().to_string(),
            data: Some(data),
        }
    }

    /// Builds an error envelope for a well-known response code.
    pub fn error(code: ResponseCode) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            code: code.code(),
            info: code.message().to_string(),
            data: None,
        }
    }

    /// Builds an error envelope from an interception-layer error.
    ///
    /// Business errors keep their own code and message; everything else uses
    /// the mapped response code's defaults.
    pub fn from_error(err: &ForumError) -> Self {
        match err {
            ForumError::Business { code, message } => Self {
                status: STATUS_ERROR.to_string(),
                code: *code,
                info: message.clone(),
                data: None,
            },
            other => Self::error(other.response_code()),
        }
    }

    /// Whether this envelope reports overall success.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let vo = ResponseVo::success(42);
        assert!(vo.is_success());
        assert_eq!(vo.code, 200);
        assert_eq!(vo.data, Some(42));
    }

    #[test]
    fn test_error_envelope() {
        let vo: ResponseVo<()> = ResponseVo::error(ResponseCode::TooManyOperations);
        assert!(!vo.is_success());
        assert_eq!(vo.code, 602);
        assert!(vo.data.is_none());
    }

    #[test]
    fn test_from_business_error_keeps_code_and_message() {
        let err = ForumError::business(601, "article already exists");
        let vo: ResponseVo<()> = ResponseVo::from_error(&err);
        assert_eq!(vo.code, 601);
        assert_eq!(vo.info, "article already exists");
    }

    #[test]
    fn test_from_unauthorized_error() {
        let vo: ResponseVo<()> = ResponseVo::from_error(&ForumError::Unauthorized);
        assert_eq!(vo.code, 901);
        assert!(!vo.is_success());
    }
}
