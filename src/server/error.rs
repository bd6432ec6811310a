use crate::errors::AppError;
use crate::server::response::StatusResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Every failure has the same body, `{"status":"error"}`.
///
/// Validation errors answer 422; store and runtime failures answer 500 and
/// log their cause.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            tracing::debug!(error = %self, "Rejected request");
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            tracing::error!(error = %self, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(StatusResponse::error())).into_response()
    }
}
