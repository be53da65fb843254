//! Axum integration for [`AppError`]

use super::types::AppError;
use axum::Json;
use axum::response::{IntoResponse, Response};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        (status, Json(self)).into_response()
    }
}
