//! Client-related types shared between the backend and the dashboard
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
///
/// Credentials always travel in a POST body, never in a query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
///
/// The auth contract is a plain boolean: either the credentials matched a
/// known user or they did not. No token, no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
}
