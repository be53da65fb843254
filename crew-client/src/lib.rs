//! Crew Client - HTTP client for the employee REST backend
//!
//! Provides typed, asynchronous calls against the generic JSON backend
//! (`/employees` CRUD plus the boolean login endpoint).

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models::{Employee, NewEmployee};
