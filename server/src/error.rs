//! HTTP-facing errors.
//!
//! Every failure a handler can produce ends up as a status code plus a
//! `{"error": "..."}` body.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;
use crate::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Todo not found")]
    NotFound,

    #[error("Invalid JSON body")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid JSON body")]
    UnreadableBody(#[from] BytesRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TitleRequired | AppError::InvalidBody(_) | AppError::UnreadableBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TitleRequired => AppError::TitleRequired,
            StoreError::NotFound(_) => AppError::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
            }
            AppError::UnreadableBody(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
            }
            _ => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
