//! Data models
//!
//! Shared between the mock backend and the dashboard (via API).
//! All IDs are `i64` (snowflake, server-assigned).

pub mod employee;
pub mod portrait;

// Re-exports
pub use employee::*;
pub use portrait::{MAX_IMAGE_BYTES, PortraitError};
