use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spendtrack_core::errors::Error as CoreError;
use thiserror::Error;

use crate::auth::AuthError;

/// Body sent for every server-side failure; details only go to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Database(_) | CoreError::Unexpected(_) => {
                    tracing::error!("Request failed: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        GENERIC_ERROR_MESSAGE.to_string(),
                    )
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
            ApiError::Internal(reason) => {
                tracing::error!("Request failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ApiError::Unauthorized("Unauthorized".to_string()),
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Response for a handler that panicked, in the same shape as other server errors.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
