//! Error types for the catalog server

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::FieldError, views};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Central handler for every error a route lets through.
///
/// Server-side failures are logged in full but rendered with a generic
/// message only.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, views::not_found()).into_response()
            }
            AppError::Validation(errors) => {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    StatusCode::BAD_REQUEST,
                    views::error_page(StatusCode::BAD_REQUEST, &message),
                )
                    .into_response()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                views::error_page(StatusCode::BAD_REQUEST, &msg),
            )
                .into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                server_error()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                server_error()
            }
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!("Form body rejected: {}", rejection.body_text());
        AppError::BadRequest("The submitted form could not be read.".to_string())
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        views::error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Sorry! There was an unexpected error on the server.",
        ),
    )
        .into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
