//! Crew Mock - in-memory stand-in for the employee REST backend
//!
//! Implements the generic JSON contract the dashboard talks to
//! (`/employees` CRUD plus `/auth/login`) with no storage behind it.
//! Tests spawn it in-process on an ephemeral port via [`serve`].

pub mod api;
pub mod state;

pub use api::router;
pub use state::{AppState, UserCredential};

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Serve the mock backend on an already-bound listener
pub async fn serve(
    listener: tokio::net::TcpListener,
    state: Arc<AppState>,
) -> std::io::Result<()> {
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    axum::serve(listener, app).await
}
