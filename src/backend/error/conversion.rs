/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for backend errors,
 * allowing them to be returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * Error responses use the same envelope as successful ones:
 * ```json
 * {
 *   "status": false,
 *   "message": "Data not found",
 *   "errors": ["No Data with given id"],
 *   "data": {}
 * }
 * ```
 */

use axum::response::{IntoResponse, Response};

use crate::backend::error::types::BackendError;
use crate::backend::response::build_error_response;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server-side failures are logged here with their full cause; the
    /// response body only carries the sanitized detail.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = build_error_response(self.message(), &self.detail());
        (status, body).into_response()
    }
}
