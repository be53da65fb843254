//! Unified error codes for the Crew dashboard
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee record rejected by field validation
    EmployeeInvalid = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeInvalid => "Employee record failed validation",
            Self::InternalError => "Internal error",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidRequest | Self::EmployeeInvalid => {
                StatusCode::BAD_REQUEST
            }
            Self::NotAuthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when a u16 does not correspond to a known error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            8001 => Ok(Self::EmployeeNotFound),
            8002 => Ok(Self::EmployeeInvalid),
            9001 => Ok(Self::InternalError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::EmployeeNotFound,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert!(ErrorCode::try_from(4242).is_err());
    }

    #[test]
    fn maps_to_expected_http_status() {
        use http::StatusCode;
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::EmployeeInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
