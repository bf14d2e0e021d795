use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use push_contact_reconciler::error::{ErrorKind, ReconcilerError};
use serde_json::json;
use std::fmt;
use tracing::{error, info};

#[derive(Debug)]
pub struct AppError {
    pub status_code: StatusCode,
    pub cause: String,
    pub message: Option<String>,
}

impl AppError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "cause": self.cause,
            "message": self.message,
        }));

        if self.status_code.is_server_error() {
            error!(cause = %self.cause, "Request failed");
        } else if self.status_code.is_client_error() {
            info!(cause = %self.cause, "Request rejected");
        }

        (self.status_code, body).into_response()
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl From<ReconcilerError> for AppError {
    fn from(inner: ReconcilerError) -> Self {
        let status_code = match inner.kind {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status_code,
            cause: inner.cause,
            message: inner.message,
        }
    }
}
