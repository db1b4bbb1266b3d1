//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or empty required fields.
    #[error("{0}")]
    Validation(String),
    /// Phone number already taken by another customer.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Conflict maps to 400, not 409: the API contract treats a duplicate
    /// phone number like any other rejected input.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(ref e) = self {
            tracing::error!(error = %e, "database error");
        }
        let status = self.status();
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
