//! Caller-facing error payload.
//!
//! Transport agnostic: inbound adapters map the [`ErrorCode`] onto their own
//! status scheme and serialise the payload as-is.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input failed validation or could not be decoded.
    InvalidRequest,
    /// Credentials were rejected.
    Unauthorized,
    /// Something failed inside the service.
    InternalError,
}

impl ErrorCode {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::Unauthorized => "Unauthorized",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Error returned by ports and surfaced to callers.
///
/// A blank message is replaced by a generic one for the code, so the payload
/// always carries readable text.
///
/// # Examples
/// ```
/// use restaurant_discovery::domain::{Error, ErrorCode};
///
/// let err = Error::unauthorized("  ");
/// assert_eq!(err.code(), ErrorCode::Unauthorized);
/// assert_eq!(err.message(), "Unauthorized");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    code: ErrorCode,
    message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    fn with_code(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            Cow::Borrowed(code.fallback_message())
        } else {
            message
        };
        Self {
            code,
            message,
            details: None,
        }
    }

    /// Validation or decoding failure.
    pub fn invalid_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_code(ErrorCode::InvalidRequest, message)
    }

    /// Rejected credentials.
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_code(ErrorCode::Unauthorized, message)
    }

    /// Unexpected internal failure.
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_code(ErrorCode::InternalError, message)
    }

    /// Attach structured details, such as per-field validation failures.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured details, when attached.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
