use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { msg: String },
    NotFound { msg: String },
    MongoError { msg: String },
    ConfigError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest { msg } => write!(f, "Bad Request: '{}'", msg),
            AppError::NotFound { msg } => write!(f, "Not Found: '{}'", msg),
            AppError::MongoError { msg } => write!(f, "MongoDB Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Configuration Error: '{}'", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors are answered without a body, the reason is only logged by the service.
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST.into_response(),
            AppError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
        }
    }
}
