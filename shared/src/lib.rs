//! Shared types for the Crew dashboard
//!
//! Common types used across the client, the mock backend and the console:
//! data models, validation, error types and auth DTOs.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
