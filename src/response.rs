//! Standard response envelope helpers.
//!
//! Every endpoint answers with the same shape: `{"success": true, "message",
//! "data"}` on success, `{"success": false, "message"}` on failure. Success is
//! always HTTP 200, including creates.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: String) -> Self {
        ErrorBody {
            success: false,
            message,
        }
    }
}

pub fn success<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<SuccessBody<T>>) {
    (
        StatusCode::OK,
        Json(SuccessBody {
            success: true,
            message: message.to_string(),
            data,
        }),
    )
}

/// Success with no payload; `data` serializes as JSON null.
pub fn success_empty(message: &str) -> (StatusCode, Json<SuccessBody<Option<()>>>) {
    success(None, message)
}
