//! Unified error system for the Crew dashboard
//!
//! - [`ErrorCode`]: standardized error codes grouped in numeric bands
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid email format")
//!     .with_detail("field", "email");
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
