/**
 * Response Envelope
 *
 * Every JSON body the API returns has the same shape:
 *
 * ```json
 * {
 *   "status": true,
 *   "message": "OK",
 *   "errors": null,
 *   "data": { ... }
 * }
 * ```
 *
 * Error responses set `status` to false, split the detail text on newlines
 * into `errors` and carry an empty object as `data`.
 */

use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

/// Uniform JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
    pub data: T,
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmptyObject {}

/// Build a successful envelope around `data`
pub fn build_response<T: Serialize>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    ApiResponse {
        status: true,
        message: message.into(),
        errors: None,
        data,
    }
}

/// Build a failed envelope; `detail` is split into one entry per line
pub fn build_error_response(message: impl Into<String>, detail: &str) -> ApiResponse<EmptyObject> {
    ApiResponse {
        status: false,
        message: message.into(),
        errors: Some(detail.split('\n').map(str::to_string).collect()),
        data: EmptyObject::default(),
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
